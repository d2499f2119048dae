use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubmitRequest {
    pub publisher: String,
    pub name: String,
}

impl SubmitRequest {
    pub fn new(publisher: &str, name: &str) -> Self {
        Self {
            publisher: publisher.to_string(),
            name: name.to_string(),
        }
    }
}
