use std::cell::RefCell;

use super::{HttpClient, Response};

pub struct MockClient {
    responses: RefCell<Vec<Response>>,
    requested: RefCell<Vec<String>>,
}

impl HttpClient for MockClient {
    fn get(&self, url: &str) -> Response {
        self.requested.borrow_mut().push(url.to_string());

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error("no mocked response left")
        } else {
            responses.remove(0)
        }
    }
}

impl MockClient {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}
