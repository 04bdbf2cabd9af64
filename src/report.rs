use crate::error::{ErrorCategory, FetchError};
use crate::fetcher::Saved;

pub fn saved_lines(saved: &Saved) -> [String; 2] {
    [
        format!("✓ Successfully fetched: {}", saved.file_name),
        format!("✓ Image saved to {}", saved.path.display()),
    ]
}

pub fn failure_line(url: &str, error: &FetchError) -> String {
    match error {
        FetchError::NotAnImage { content_type } => {
            format!("✗ Skipped: {} (Not an image, got {})", url, content_type)
        }
        FetchError::Duplicate { file_name } => format!("✗ Duplicate skipped: {}", file_name),
        _ if error.category() == ErrorCategory::Connection => {
            format!("✗ Connection error for {}: {}", url, error)
        }
        _ => format!("✗ An error occurred for {}: {}", url, error),
    }
}
