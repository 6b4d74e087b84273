//! MIME type lookup module
//!
//! Maps the extensions the asset gate recognises to the Content-Type it advertises.
//! Anything outside the table has no content type and must not be served.

/// Get the Content-Type for a file extension (case-insensitive)
///
/// # Examples
/// ```
/// use asset_gate::http::mime::content_type_for;
/// assert_eq!(content_type_for("png"), Some("image/png"));
/// assert_eq!(content_type_for("JPEG"), Some("image/jpg"));
/// assert_eq!(content_type_for("html"), None);
/// ```
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        // Images
        "gif" => Some("image/gif"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpg"),

        // Stylesheets and scripts
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),

        // Documents
        "pdf" => Some("application/pdf"),

        _ => None,
    }
}
