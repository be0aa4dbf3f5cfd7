#![allow(dead_code)]

use std::io::{Cursor, Write};

use axum::body::Body;
use axum::http::Request;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A PNG header followed by filler, enough for magic-byte sniffing.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

/// A JPEG header followed by filler.
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// Builds an in-memory docx: one `word/document.xml` holding `text` as a
/// single paragraph, plus one `word/media/` entry per `(name, bytes)` pair.
pub fn docx_with(text: &str, media: &[(&str, &[u8])]) -> Vec<u8> {
    docx_from_document_xml(&document_xml(text), media)
}

/// Same as [`docx_with`] but with the full document part supplied verbatim.
pub fn docx_from_document_xml(document_xml: &str, media: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();

    for (name, data) in media {
        zip.start_file(format!("word/media/{name}"), options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap();
    buffer
}

pub fn document_xml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:body></w:document>"
    )
}

/// A zip archive that is valid but carries no `word/document.xml`.
pub fn zip_without_document_part() -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("unrelated.txt", options).unwrap();
    zip.write_all(b"nothing to see").unwrap();

    zip.finish().unwrap();
    buffer
}

const BOUNDARY: &str = "lectern-test-boundary";

/// Builds a `POST` request with one multipart field named `file`.
pub fn multipart_upload(uri: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    multipart_upload_field(uri, "file", filename, bytes)
}

/// Builds a `POST` request with one multipart file field of arbitrary name.
pub fn multipart_upload_field(
    uri: &str,
    field_name: &str,
    filename: &str,
    bytes: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
