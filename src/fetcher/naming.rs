pub const DEFAULT_FILE_NAME: &str = "downloaded_image.jpg";

/// Last segment of the URL path exactly as the user typed it.
///
/// The name is taken from the raw string rather than a parsed `Url`, which
/// would percent-encode spaces and non-ASCII characters. `.` and `..` fall
/// back to the default so the file always lands inside the target directory.
///
/// Different URLs ending in the same segment map to the same name; the later
/// download overwrites the earlier file.
pub fn file_name_from_url(url: &str) -> String {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);

    let before_query = after_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let path = before_query
        .find('/')
        .map_or("", |start| &before_query[start..]);

    path.rsplit('/')
        .next()
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}
