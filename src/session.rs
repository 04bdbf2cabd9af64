use std::io::{self, BufRead, Write};

use itertools::Itertools;
use tracing::info;

use crate::fetcher::{HttpClient, ImageFetcher};
use crate::hashes::SeenHashes;

pub const BANNER: &str =
    "Welcome to the Ubuntu Image Fetcher\nA tool for mindfully collecting images from the web\n";
pub const PROMPT: &str = "Please enter image URLs (comma separated): ";
pub const CLOSING: &str = "\nConnection strengthened. Community enriched.";

/// Splits a comma separated line into trimmed, non-empty URLs.
pub fn parse_urls(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect_vec()
}

/// Prompts once and reads a single line. End of input yields no URLs.
pub fn prompt_urls<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Vec<String>> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(parse_urls(&line))
}

/// Fetches every URL in order, threading the hash set through each call.
pub fn fetch_all<T: HttpClient>(fetcher: &ImageFetcher<T>, urls: &[String]) -> SeenHashes {
    let seen = urls
        .iter()
        .fold(SeenHashes::new(), |seen, url| fetcher.fetch(url, seen));

    info!(
        requested = urls.len(),
        saved = seen.len(),
        target_dir = %fetcher.target_dir().display(),
        "run finished"
    );

    seen
}
