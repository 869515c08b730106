use crate::mime::{self, Mime};
use crate::{FileEntry, PartDefect};

/// One decoded body fragment.
#[derive(Debug)]
pub(crate) enum DecodedPart {
    Field { name: String, value: String },
    File(FileEntry),
}

/// Decodes the fragment lying between two boundary delimiters.
///
/// The fragment still carries its leading CRLF (left over from the boundary line) and the
/// trailing CRLF the delimiter convention appends to every part body.
pub(crate) fn decode_part(fragment: &[u8]) -> Result<DecodedPart, PartDefect> {
    let separator = find(fragment, b"\r\n\r\n").ok_or(PartDefect::MissingBlankLine)?;

    let header_block = String::from_utf8_lossy(&fragment[..separator]);
    let mut body_block = &fragment[separator + 4..];

    if body_block.ends_with(b"\r\n") {
        body_block = &body_block[..body_block.len() - 2];
    }

    let name = quoted_parameter(&header_block, "name").ok_or(PartDefect::MissingName)?;

    match quoted_parameter(&header_block, "filename") {
        Some(file_name) => {
            let content_type = content_type_line(&header_block)
                .and_then(|value| value.parse::<Mime>().ok())
                .unwrap_or(mime::APPLICATION_OCTET_STREAM);

            Ok(DecodedPart::File(FileEntry {
                field_name: name,
                file_name,
                content_type,
                data: body_block.to_vec(),
            }))
        },
        None => {
            Ok(DecodedPart::Field {
                name,
                value: String::from_utf8_lossy(body_block).into_owned(),
            })
        },
    }
}

/// Returns the position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Extracts a non-empty double-quoted parameter value (`key="..."`) from the header block.
///
/// An occurrence only counts when `key` stands on its own, so looking up `name` never matches
/// the tail of `filename`. An empty value is treated as absent, which keeps the empty-filename
/// parts sent by browsers for blank file inputs classified as text fields.
fn quoted_parameter(header_block: &str, key: &str) -> Option<String> {
    let pattern = format!("{}=\"", key);
    let mut search_from = 0;

    while let Some(relative) = header_block[search_from..].find(&pattern) {
        let start = search_from + relative;
        let value_start = start + pattern.len();

        let standalone = header_block[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());

        if standalone {
            let value_end = header_block[value_start..].find('"')? + value_start;
            let value = &header_block[value_start..value_end];

            if value.is_empty() {
                return None;
            }

            return Some(value.to_string());
        }

        search_from = value_start;
    }

    None
}

/// Returns the value of the part's `Content-Type` header line, if it has one.
fn content_type_line(header_block: &str) -> Option<&str> {
    for line in header_block.split("\r\n") {
        if let Some((header_name, value)) = line.split_once(':') {
            if header_name.trim().eq_ignore_ascii_case("content-type") {
                return Some(value.trim());
            }
        }
    }

    None
}
