mod provider;
#[cfg(test)]
mod test;

pub use provider::OpenAIProvider;
