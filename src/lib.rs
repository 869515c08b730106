/*!
# Multipart Form Decoder

This crate provides a lenient decoder for `multipart/form-data` request bodies that have been
fully buffered in memory, plus a parser interface for the Rocket framework which does the
buffering for you.

The decoder splits a body into parts on the boundary declared by the `Content-Type` header and
classifies every part as either a plain text field or a file attachment. It is deliberately
forgiving: a request that is not multipart, a header without a boundary, or an individual
malformed part all degrade to fewer results instead of an error, so an empty result is always
ambiguous between "no multipart data" and "no valid parts".

## Example

```rust
use rocket::http::ContentType;
use rocket::post;
use rocket::Data;

use multipart_form_decoder::{DecodedFormData, FormDecodeError, FormDecodeOptions};

#[post("/", data = "<data>")]
async fn index(content_type: &ContentType, data: Data<'_>) -> Result<String, &'static str> {
    let options = FormDecodeOptions::new().max_data_bytes(8 * 1024 * 1024);

    let form_data = match DecodedFormData::parse(content_type, data, options).await {
        Ok(form_data) => form_data,
        Err(FormDecodeError::DataTooLargeError) => return Err("The request body is too large."),
        Err(FormDecodeError::IoError(_)) => return Err("The request body could not be read."),
    };

    let name = form_data.fields.get("name").cloned().unwrap_or_default();

    for file in &form_data.files {
        // `file.data` holds the raw payload. Persist it wherever uploads belong.
        let _ = (&file.file_name, &file.content_type, &file.data);
    }

    Ok(format!("received {} file(s) for {:?}", form_data.files.len(), name))
}
# fn main() {}
```

The pure entry points `DecodedFormData::decode` and `DecodedFormData::decode_with_boundary`
take an already buffered body and perform no I/O at all, so they can also be used far away
from Rocket.
*/

pub extern crate mime;

mod boundary;
mod decoded_form_data;
mod fields;
mod form_decode_errors;
mod form_decode_options;
mod part;
mod part_defect;

pub use decoded_form_data::*;
pub use fields::*;
pub use form_decode_errors::*;
pub use form_decode_options::*;
pub use part_defect::*;
