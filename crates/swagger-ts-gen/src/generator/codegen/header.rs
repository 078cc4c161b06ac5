use std::fmt;

use crate::generator::schema::SwaggerDocument;

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Banner written at the top of every generated file.
///
/// It carries no timestamp so regenerating an unchanged document is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileHeader {
  pub title: String,
  pub version: String,
}

impl FileHeader {
  #[must_use]
  pub fn from_document(document: &SwaggerDocument) -> Self {
    Self {
      title: document.info.title.trim().to_string(),
      version: document.info.version.trim().to_string(),
    }
  }
}

impl fmt::Display for FileHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "/* eslint-disable */")?;
    writeln!(f, "/**")?;
    writeln!(f, " * AUTO-GENERATED CODE - DO NOT EDIT!")?;
    match (self.title.is_empty(), self.version.is_empty()) {
      (false, false) => writeln!(f, " * Source: {} {}", self.title, self.version)?,
      (false, true) => writeln!(f, " * Source: {}", self.title)?,
      (true, false) => writeln!(f, " * Version: {}", self.version)?,
      (true, true) => {}
    }
    writeln!(f, " * Generated by `{GENERATOR_NAME}`")?;
    writeln!(f, " */")
  }
}
