use crate::mime::Mime;

/// A file attachment extracted from a multipart body.
///
/// The decoder constructs these; the caller owns them afterwards and decides
/// whether to persist the payload or drop it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The form field name the file was submitted under.
    pub field_name:   String,
    /// The file name declared by the client.
    pub file_name:    String,
    /// The declared MIME type, `application/octet-stream` when the part did
    /// not declare one.
    pub content_type: Mime,
    /// The raw payload bytes.
    pub data:         Vec<u8>,
}
