pub mod config;
pub mod error;
pub mod fetcher;
pub mod hashes;
pub mod logger;
pub mod report;
pub mod session;

pub use config::{Cli, FetcherConfig};
pub use error::{ErrorCategory, FetchError};
pub use fetcher::{HttpClient, ImageFetcher, Response, Saved, UreqClient};
pub use hashes::SeenHashes;
