/// Extracts the boundary token from a raw `Content-Type` header value.
///
/// Returns `None` when the header does not describe multipart/form-data or carries no usable
/// `boundary=` parameter. Browsers may double-quote the token; the quotes are not part of it.
pub(crate) fn extract_boundary(content_type_header: &str) -> Option<&str> {
    if !content_type_header.contains("multipart/form-data") {
        return None;
    }

    for param in content_type_header.split(';') {
        if let Some((key, value)) = param.split_once('=') {
            if key.trim().eq_ignore_ascii_case("boundary") {
                let value = value.trim().trim_matches('"');

                if value.is_empty() {
                    return None;
                }

                return Some(value);
            }
        }
    }

    None
}
