use rocket::http::{ContentType, Status};
use rocket::{launch, post, routes, Data};

use multipart_form_decoder::{DecodedFormData, FormDecodeError, FormDecodeOptions};

#[post("/upload", data = "<data>")]
async fn upload(content_type: &ContentType, data: Data<'_>) -> Result<String, Status> {
    let options = FormDecodeOptions::new().max_data_bytes(32 * 1024 * 1024);

    let form_data = match DecodedFormData::parse(content_type, data, options).await {
        Ok(form_data) => form_data,
        Err(FormDecodeError::DataTooLargeError) => return Err(Status::PayloadTooLarge),
        Err(FormDecodeError::IoError(_)) => return Err(Status::InternalServerError),
    };

    let title = form_data
        .fields
        .get("title")
        .cloned()
        .unwrap_or_else(|| String::from("Untitled Product"));

    let mut lines = vec![format!("product: {}", title)];

    for file in &form_data.files {
        // A real deployment would persist the payload and keep the resulting URL.
        lines.push(format!(
            "image: {} ({}, {} bytes)",
            file.file_name,
            file.content_type,
            file.data.len()
        ));
    }

    Ok(lines.join("\n"))
}

#[launch]
fn rocket() -> _ {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    rocket::build().mount("/", routes![upload])
}
