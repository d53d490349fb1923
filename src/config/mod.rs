pub mod constants;
pub mod lib;
pub mod models;

pub use lib::load_config;
pub use models::GatewayConfig;
