use super::{FileHeader, INDENT, render_docs, render_imports};
use crate::{
  generator::ast::{ImportSet, InterfaceDef, ModelDef, ModelKind, TypeAliasDef},
  naming::identifiers::to_file_stem,
};

/// Renders `models/<stem>.d.ts`.
#[must_use]
pub fn render_model(model: &ModelDef, header: &FileHeader, plugins_module: &str) -> String {
  let mut imports = ImportSet::new();
  for dep in &model.imports {
    imports.add(&format!("./{}", to_file_stem(dep)), dep.as_str());
  }
  imports.extend(plugins_module, model.plugins.iter().cloned());

  let mut out = header.to_string();
  if !imports.is_empty() {
    out.push('\n');
    out.push_str(&render_imports(&imports));
  }
  out.push('\n');

  match &model.kind {
    ModelKind::Interface(def) => out.push_str(&render_interface(def)),
    ModelKind::Alias(def) => out.push_str(&render_alias(def)),
  }
  out
}

fn render_interface(def: &InterfaceDef) -> String {
  let mut out = render_docs(&def.docs, 0);
  out.push_str(&format!("export interface {}", def.name));
  if !def.parents.is_empty() {
    let parents: Vec<&str> = def.parents.iter().map(|p| p.as_str()).collect();
    out.push_str(&format!(" extends {}", parents.join(", ")));
  }

  if def.properties.is_empty() {
    out.push_str(" {}\n");
    return out;
  }

  out.push_str(" {\n");
  for prop in &def.properties {
    out.push_str(&render_docs(&prop.docs, 1));
    let marker = if prop.optional { "?" } else { "" };
    out.push_str(&format!("{INDENT}{}{marker}: {};\n", prop.name, prop.ts_type));
  }
  out.push_str("}\n");
  out
}

fn render_alias(def: &TypeAliasDef) -> String {
  let mut out = render_docs(&def.docs, 0);
  out.push_str(&format!("export type {} = {};\n", def.name, def.target));
  out
}

/// Renders `models/index.d.ts`, re-exporting every model file in emission order.
#[must_use]
pub fn render_index<'a>(stems: impl IntoIterator<Item = &'a str>, header: &FileHeader) -> String {
  let mut out = header.to_string();
  out.push('\n');
  for stem in stems {
    out.push_str(&format!("export * from './{stem}';\n"));
  }
  out
}
