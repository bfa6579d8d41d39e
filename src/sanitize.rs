//! Line and filename sanitization.
//!
//! Source lists are plain text, one domain or pattern per line, with optional
//! `# comment` suffixes. Entries are compared byte-for-byte after
//! sanitization; no case folding or scheme stripping is performed.

/// Normalize one raw line from a source list.
///
/// Truncates at the first `#`, trims surrounding whitespace, and returns
/// `None` if nothing remains.
///
/// # Examples
/// ```
/// use bogsweep::sanitize::sanitize_line;
/// assert_eq!(sanitize_line("a.com # comment"), Some("a.com"));
/// assert_eq!(sanitize_line("   "), None);
/// assert_eq!(sanitize_line("#onlycomment"), None);
/// ```
pub fn sanitize_line(line: &str) -> Option<&str> {
    let stripped = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Derive a safe output filename stem from a category heading.
///
/// `&` becomes `and`, the result is lower-cased, every character that is not
/// ASCII alphanumeric or underscore becomes an underscore, and leading or
/// trailing underscores are trimmed.
///
/// # Examples
/// ```
/// use bogsweep::sanitize::sanitize_filename;
/// assert_eq!(
///     sanitize_filename("Tracking & Telemetry Lists"),
///     "tracking_and_telemetry_lists"
/// );
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let slug: String = name
        .replace('&', "and")
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    slug.trim_matches('_').to_string()
}
