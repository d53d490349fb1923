use utoipa::OpenApi;

use crate::handlers::{predict, status};
use crate::models::predict::{AnswerResponse, ErrorResponse, PredictRequest, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(status::root, predict::predict, predict::predict_mock),
    components(schemas(PredictRequest, AnswerResponse, StatusResponse, ErrorResponse)),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Predict", description = "Public-health question answering"),
    ),
    info(
        title = "HealthBot OpenAI API",
        version = "0.1.0",
        description = "Forwards user text to an OpenAI chat-completion model and relays the answer"
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
