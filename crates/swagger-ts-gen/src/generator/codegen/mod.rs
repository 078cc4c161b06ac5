//! Text rendering of the TypeScript AST.
//!
//! Every renderer is a pure function of its input, so the same document always
//! produces byte-identical files.

use std::path::PathBuf;

use super::ast::{Documentation, ImportSet};

mod header;
mod models;
mod services;

pub use header::FileHeader;
pub use models::{render_index, render_model};
pub use services::render_service;

#[cfg(test)]
mod tests;

pub(crate) const MODELS_DIR: &str = "models";
pub(crate) const SERVICES_DIR: &str = "services";
pub(crate) const MODEL_EXTENSION: &str = "d.ts";
pub(crate) const SERVICE_EXTENSION: &str = "service.ts";

const INDENT: &str = "  ";

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
}

impl GeneratedFile {
  #[must_use]
  pub fn model(stem: &str, contents: String) -> Self {
    Self {
      path: PathBuf::from(MODELS_DIR).join(format!("{stem}.{MODEL_EXTENSION}")),
      contents,
    }
  }

  #[must_use]
  pub fn service(stem: &str, contents: String) -> Self {
    Self {
      path: PathBuf::from(SERVICES_DIR).join(format!("{stem}.{SERVICE_EXTENSION}")),
      contents,
    }
  }
}

/// JSDoc block at the given indentation level, or nothing for empty docs.
pub(crate) fn render_docs(docs: &Documentation, level: usize) -> String {
  if docs.is_empty() {
    return String::new();
  }

  let pad = INDENT.repeat(level);
  let mut out = format!("{pad}/**\n");
  for line in docs.lines() {
    if line.is_empty() {
      out.push_str(&format!("{pad} *\n"));
    } else {
      out.push_str(&format!("{pad} * {line}\n"));
    }
  }
  out.push_str(&format!("{pad} */\n"));
  out
}

/// `import { A, B } from 'module';` lines, one per module.
pub(crate) fn render_imports(imports: &ImportSet) -> String {
  imports
    .iter()
    .filter(|(_, names)| !names.is_empty())
    .map(|(module, names)| {
      let names: Vec<&str> = names.iter().map(String::as_str).collect();
      format!("import {{ {} }} from '{module}';\n", names.join(", "))
    })
    .collect()
}
