mod ureq_client;

pub use ureq_client::UreqClient;

#[cfg(test)]
mod mock_client;

#[cfg(test)]
pub use mock_client::MockClient;

#[derive(Debug)]
pub enum Response {
    Ok {
        body: Vec<u8>,
        content_type: Option<String>,
    },
    Status(u16),
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self::Ok { body, content_type }
    }

    pub fn status(status: u16) -> Self {
        Self::Status(status)
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

/// Performs a single GET and reports what came back.
pub trait HttpClient {
    fn get(&self, url: &str) -> Response;
}
