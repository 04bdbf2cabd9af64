mod client;
mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info, info_span, warn};
use url::Url;

pub use client::{HttpClient, Response, UreqClient};
pub use naming::{file_name_from_url, DEFAULT_FILE_NAME};

use crate::config::FetcherConfig;
use crate::error::{ErrorCategory, FetchError, Result};
use crate::hashes::{content_hash, SeenHashes};
use crate::report;

pub struct ImageFetcher<T: HttpClient> {
    client: T,
    target_dir: PathBuf,
}

/// An image that was written to the target directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub source: String,
    pub file_name: String,
    pub path: PathBuf,
    pub hash: String,
    pub format: Option<ImageFormat>,
}

impl<T> ImageFetcher<T>
where
    T: HttpClient,
{
    pub fn with_client(target_dir: impl Into<PathBuf>, client: T) -> Self {
        ImageFetcher {
            client,
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Fetches one URL, prints the outcome and hands the hash set back.
    ///
    /// Never fails: every problem is reported and leaves `seen` unchanged.
    pub fn fetch(&self, url: &str, mut seen: SeenHashes) -> SeenHashes {
        let span = info_span!("fetch", %url);
        let _enter = span.enter();

        match self.try_fetch(url, &seen) {
            Ok(saved) => {
                for line in report::saved_lines(&saved) {
                    println!("{}", line);
                }

                info!(
                    source = %saved.source,
                    path = %saved.path.display(),
                    format = ?saved.format,
                    "image saved"
                );

                seen.insert(saved.hash);
            }

            Err(error) => {
                match error.category() {
                    ErrorCategory::Unexpected => warn!(error = %error, "fetch failed"),
                    _ => debug!(error = %error, "fetch skipped"),
                }

                println!("{}", report::failure_line(url, &error));
            }
        }

        seen
    }

    /// Runs every step of a fetch without touching `seen`.
    pub fn try_fetch(&self, url: &str, seen: &SeenHashes) -> Result<Saved> {
        fs::create_dir_all(&self.target_dir)?;

        let parsed = Url::parse(url)?;

        let (body, content_type) = match self.client.get(parsed.as_str()) {
            Response::Ok { body, content_type } => (body, content_type.unwrap_or_default()),
            Response::Status(status) => return Err(FetchError::Status { status }),
            Response::InvalidBody(message) => return Err(FetchError::Body { message }),
            Response::NetworkError(message) => return Err(FetchError::Network { message }),
        };

        if !content_type.starts_with("image/") {
            return Err(FetchError::NotAnImage { content_type });
        }

        let file_name = file_name_from_url(url);

        let hash = content_hash(&body);

        if seen.contains(&hash) {
            return Err(FetchError::Duplicate { file_name });
        }

        let path = self.target_dir.join(&file_name);

        if path.exists() {
            debug!(path = %path.display(), "overwriting existing file");
        }

        fs::write(&path, &body)?;

        Ok(Saved {
            source: url.to_string(),
            file_name,
            path,
            hash,
            format: image_format(&content_type),
        })
    }
}

impl ImageFetcher<UreqClient> {
    pub fn new(config: &FetcherConfig) -> Self {
        let client = UreqClient::from_config(config);
        ImageFetcher::with_client(config.target_dir.clone(), client)
    }
}

fn image_format(content_type: &str) -> Option<ImageFormat> {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    ImageFormat::from_mime_type(mime)
}

#[cfg(test)]
pub(crate) use client::MockClient;
