use std::collections::HashMap;

use rocket::http::ContentType;
use rocket::Data;

use tracing::debug;

use crate::boundary::extract_boundary;
use crate::part::{decode_part, find, DecodedPart};
use crate::{FileEntry, FormDecodeError, FormDecodeOptions};

/// Decoded multipart/form-data: plain text fields and file attachments.
#[derive(Debug, Default)]
pub struct DecodedFormData {
    /// Plain text fields, keyed by field name. A name submitted more than once keeps its
    /// last value.
    pub fields: HashMap<String, String>,
    /// File attachments, in body order.
    pub files:  Vec<FileEntry>,
}

impl DecodedFormData {
    /// Decode a fully buffered multipart/form-data body.
    ///
    /// `content_type_header` is the raw `Content-Type` request header value. A header that is
    /// not multipart/form-data, or that carries no boundary, yields an empty result without
    /// the body being read; a malformed part is skipped on its own while its siblings still
    /// decode. This function never fails and touches no state outside its own return value.
    pub fn decode(body: &[u8], content_type_header: &str) -> DecodedFormData {
        match extract_boundary(content_type_header) {
            Some(boundary) => Self::decode_with_boundary(body, boundary),
            None => {
                debug!(
                    header = content_type_header,
                    "no usable multipart boundary, producing empty form data"
                );

                DecodedFormData::default()
            },
        }
    }

    /// Decode a fully buffered multipart body against a known boundary token.
    ///
    /// The body is treated as raw bytes throughout. File payloads round-trip byte-for-byte;
    /// field values are decoded as UTF-8, lossily.
    pub fn decode_with_boundary(body: &[u8], boundary: &str) -> DecodedFormData {
        let mut form_data = DecodedFormData::default();

        if boundary.is_empty() {
            debug!("empty boundary token, producing empty form data");

            return form_data;
        }

        let delimiter = format!("--{}", boundary).into_bytes();

        for fragment in split_on(body, &delimiter) {
            if fragment.is_empty() || fragment == b"--" || fragment == b"--\r\n" {
                // The preamble before the first delimiter, or the terminal delimiter.
                continue;
            }

            match decode_part(fragment) {
                Ok(DecodedPart::Field {
                    name,
                    value,
                }) => {
                    form_data.fields.insert(name, value);
                },
                Ok(DecodedPart::File(file)) => form_data.files.push(file),
                Err(defect) => {
                    debug!(%defect, "skipping malformed part");
                },
            }
        }

        form_data
    }

    /// Read and decode a multipart/form-data request body from Rocket.
    ///
    /// The whole body is buffered before decoding starts, reading at most
    /// `options.max_data_bytes` bytes; the decoder itself does not stream. A request whose
    /// content type is not multipart/form-data, or whose boundary is missing, decodes to an
    /// empty `DecodedFormData` rather than an error, matching the pure entry points.
    pub async fn parse(
        content_type: &ContentType,
        data: Data<'_>,
        options: FormDecodeOptions,
    ) -> Result<DecodedFormData, FormDecodeError> {
        if !content_type.is_form_data() {
            debug!("content type is not multipart/form-data, producing empty form data");

            return Ok(DecodedFormData::default());
        }

        let header = content_type.to_string();

        let boundary = match extract_boundary(&header) {
            Some(boundary) => boundary.to_string(),
            None => {
                debug!("multipart content type without a boundary, producing empty form data");

                return Ok(DecodedFormData::default());
            },
        };

        let buffer = data.open(options.max_data_bytes.into()).into_bytes().await?;

        if !buffer.is_complete() {
            debug!(
                max_data_bytes = options.max_data_bytes,
                "request body exceeds the read cap"
            );

            return Err(FormDecodeError::DataTooLargeError);
        }

        Ok(Self::decode_with_boundary(&buffer.value, &boundary))
    }
}

/// Splits `haystack` on every occurrence of `delimiter`, like `str::split` over raw bytes.
fn split_on<'a>(haystack: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut fragments = Vec::new();
    let mut start = 0;

    while let Some(relative) = find(&haystack[start..], delimiter) {
        fragments.push(&haystack[start..start + relative]);
        start += relative + delimiter.len();
    }

    fragments.push(&haystack[start..]);

    fragments
}
