mod helpers;

use lectern::application::ports::{DocumentExtractor, ExtractorError};
use lectern::domain::{ContentType, ImageFormat, UploadedDocument};
use lectern::infrastructure::extraction::{DocxAdapter, wordml};

use helpers::{
    JPEG_BYTES, PNG_BYTES, docx_from_document_xml, docx_with, document_xml,
    zip_without_document_part,
};

fn docx_document(data: &[u8]) -> UploadedDocument {
    UploadedDocument::new("sample.docx".to_string(), ContentType::Docx, data.len() as u64)
}

#[tokio::test]
async fn given_single_paragraph_when_extracted_then_text_matches_exactly() {
    let data = docx_with("Hello World", &[("image1.png", PNG_BYTES)]);
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.text, "Hello World");
}

#[tokio::test]
async fn given_multiple_paragraphs_when_extracted_then_newline_separated() {
    let xml = "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
               <w:body>\
               <w:p><w:r><w:t>First</w:t></w:r></w:p>\
               <w:p><w:r><w:t>Second</w:t></w:r></w:p>\
               </w:body></w:document>";
    let data = docx_from_document_xml(xml, &[]);
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.text, "First\nSecond");
}

#[tokio::test]
async fn given_split_runs_when_extracted_then_text_is_joined() {
    let xml = "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
               <w:body><w:p>\
               <w:r><w:t xml:space=\"preserve\">Hello </w:t></w:r>\
               <w:r><w:t>World</w:t></w:r>\
               </w:p></w:body></w:document>";
    let data = docx_from_document_xml(xml, &[]);
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.text, "Hello World");
}

#[tokio::test]
async fn given_embedded_images_when_extracted_then_order_and_bytes_survive() {
    let data = docx_with(
        "Test",
        &[("image1.png", PNG_BYTES), ("image2.jpeg", JPEG_BYTES)],
    );
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.images.len(), 2);
    assert_eq!(content.images[0].name, "image1.png");
    assert_eq!(content.images[0].format, ImageFormat::Png);
    assert_eq!(content.images[0].data, PNG_BYTES);
    assert_eq!(content.images[1].name, "image2.jpeg");
    assert_eq!(content.images[1].format, ImageFormat::Jpeg);
}

#[tokio::test]
async fn given_mislabeled_image_when_extracted_then_format_is_sniffed_from_bytes() {
    // A JPEG stored as image1.png: the name lies, the bytes do not.
    let data = docx_with("Test", &[("image1.png", JPEG_BYTES)]);
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.images[0].format, ImageFormat::Jpeg);
}

#[tokio::test]
async fn given_unrecognized_media_when_extracted_then_entry_is_skipped() {
    let data = docx_with(
        "Test",
        &[("drawing1.wmf", b"\x01\x00\x09\x00"), ("image1.png", PNG_BYTES)],
    );
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.images.len(), 1);
    assert_eq!(content.images[0].name, "image1.png");
}

#[tokio::test]
async fn given_image_only_document_when_extracted_then_text_is_empty() {
    let data = docx_with("", &[("image1.png", PNG_BYTES)]);
    let adapter = DocxAdapter::new();

    let content = adapter.extract(&data, &docx_document(&data)).await.unwrap();

    assert_eq!(content.text, "");
    assert_eq!(content.images.len(), 1);
}

#[tokio::test]
async fn given_bytes_that_are_not_an_archive_when_extracted_then_malformed_error() {
    let data = b"this is not a zip archive".to_vec();
    let adapter = DocxAdapter::new();

    let err = adapter
        .extract(&data, &docx_document(&data))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractorError::MalformedDocument(_)));
}

#[tokio::test]
async fn given_archive_without_document_part_when_extracted_then_malformed_error() {
    let data = zip_without_document_part();
    let adapter = DocxAdapter::new();

    let err = adapter
        .extract(&data, &docx_document(&data))
        .await
        .unwrap_err();

    match err {
        ExtractorError::MalformedDocument(msg) => {
            assert!(msg.contains("word/document.xml"));
        }
    }
}

#[test]
fn given_entities_when_text_collected_then_they_are_decoded() {
    let xml = document_xml("Fish &amp; Chips &#8212; &lt;fresh&gt; &#x2713;");

    let text = wordml::collect_text(&xml);

    assert_eq!(text.trim_end(), "Fish & Chips \u{2014} <fresh> \u{2713}");
}

#[test]
fn given_tabs_and_breaks_when_text_collected_then_whitespace_is_kept() {
    let xml = "<w:document><w:body><w:p>\
               <w:r><w:t>left</w:t></w:r><w:r><w:tab/></w:r>\
               <w:r><w:t>right</w:t></w:r><w:r><w:br/></w:r>\
               <w:r><w:t>below</w:t></w:r>\
               </w:p></w:body></w:document>";

    let text = wordml::collect_text(xml);

    assert_eq!(text, "left\tright\nbelow\n");
}

#[test]
fn given_tab_stop_definitions_when_collected_then_no_tab_characters_leak() {
    let xml = "<w:document><w:body><w:p>\
               <w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
               <w:r><w:t>plain</w:t></w:r>\
               </w:p></w:body></w:document>";

    let text = wordml::collect_text(xml);

    assert_eq!(text, "plain\n");
}

#[test]
fn given_self_closing_text_tag_when_collected_then_no_stray_characters() {
    let xml = "<w:document><w:body><w:p><w:r><w:t/></w:r>\
               <w:r><w:t>after</w:t></w:r></w:p></w:body></w:document>";

    let text = wordml::collect_text(xml);

    assert_eq!(text, "after\n");
}
