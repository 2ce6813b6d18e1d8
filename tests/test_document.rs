//! PDF text extraction tests.

use fuelwatch::document::{extract_text, page_texts};
use fuelwatch::extract::extract_report_from_path;
use fuelwatch::FailureKind;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fs;
use std::path::Path;

/// Write a one-page PDF showing each of `lines` in Courier.
fn write_pdf(path: &Path, lines: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // One text object per line so each ends up on its own line of output
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 750 - 14 * i as i64;
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![50.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(*line)]),
            Operation::new("ET", vec![]),
        ]);
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

// ---------------------------------------------------------------------------
// Readable documents
// ---------------------------------------------------------------------------

#[test]
fn reads_text_of_generated_pdf() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("latest.pdf");
    write_pdf(&path, &["Santiago, 22 de octubre de 2025", "Diesel -2,5"]);

    let pages = page_texts(&path).unwrap();
    assert_eq!(pages.len(), 1);

    let text = extract_text(&path);
    assert!(text.contains("Santiago, 22 de octubre de 2025"), "{}", text);
    assert!(text.contains("-2,5"), "{}", text);
}

#[test]
fn report_fields_from_generated_pdf() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("latest.pdf");
    write_pdf(&path, &["Santiago, 22 de octubre de 2025", "Diesel -2,5"]);

    let record = extract_report_from_path(&path).unwrap().into_record();
    assert_eq!(record.date.as_deref(), Some("2025-10-22"));
    assert_eq!(record.diesel, -2.5);
}

// ---------------------------------------------------------------------------
// Unreadable documents
// ---------------------------------------------------------------------------

#[test]
fn garbage_bytes_give_empty_text() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("latest.pdf");
    fs::write(&path, b"<html>not a pdf</html>").unwrap();

    let err = page_texts(&path).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Document);
    assert_eq!(extract_text(&path), "");
}

#[test]
fn missing_file_gives_empty_text() {
    let tmp_dir = tempfile::tempdir().unwrap();
    assert_eq!(extract_text(&tmp_dir.path().join("absent.pdf")), "");
}

#[test]
fn unreadable_document_yields_undated_zero_record() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("latest.pdf");
    fs::write(&path, b"%PDF-1.4 truncated").unwrap();

    let record = extract_report_from_path(&path).unwrap().into_record();
    assert_eq!(record.date, None);
    assert_eq!(record.fuel_93, 0.0);
    assert_eq!(record.lpg, 0.0);
}
