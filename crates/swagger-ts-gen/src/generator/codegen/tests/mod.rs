
use super::FileHeader;

pub(super) fn header() -> FileHeader {
  FileHeader {
    title: "Shop API".to_string(),
    version: "1.2".to_string(),
  }
}

#[test]
fn test_header_has_no_timestamp() {
  let rendered = header().to_string();
  assert_eq!(
    rendered,
    "/* eslint-disable */\n/**\n * AUTO-GENERATED CODE - DO NOT EDIT!\n * Source: Shop API 1.2\n * Generated by `swagger-ts-gen`\n */\n"
  );
}

#[test]
fn test_header_without_title_or_version() {
  let rendered = FileHeader::default().to_string();
  assert!(!rendered.contains("Source:"));
  assert!(!rendered.contains("Version:"));
}
