use std::io::Read;
use std::time::Duration;

use ureq::{Agent, AgentBuilder, Error};

use super::{HttpClient, Response};
use crate::config::FetcherConfig;

pub struct UreqClient {
    agent: Agent,
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let content_type = response.header("Content-Type").map(str::to_string);

                let mut body = Vec::new();

                if let Err(error) = response.into_reader().read_to_end(&mut body) {
                    return Response::invalid_body(error.to_string());
                }

                Response::ok(body, content_type)
            }

            Err(Error::Status(status, _)) => Response::status(status),

            Err(Error::Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UreqClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let agent = AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();

        UreqClient { agent }
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(config.timeout, &config.user_agent)
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::from_config(&FetcherConfig::default())
    }
}
