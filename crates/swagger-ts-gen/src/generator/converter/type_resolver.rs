use indexmap::IndexSet;
use serde_json::Value;

use super::DependencyCollector;
use crate::{
  generator::{
    ast::TypeName,
    errors::{MAX_RESOLVE_DEPTH, ResolveError, ResolveResult},
    generics::{WrapperSet, classify_wrapper, parse_layers},
    schema::{PrimitiveKind, SchemaKind, SchemaNode},
  },
  utils::parse_definition_ref,
};

pub(crate) const TS_STRING: &str = "string";
pub(crate) const TS_NUMBER: &str = "number";
pub(crate) const TS_BOOLEAN: &str = "boolean";
pub(crate) const TS_BINARY: &str = "FormData";
pub(crate) const TS_OPEN_MAP: &str = "{ [k: string]: any }";

/// A TypeScript type expression plus what it took to build it.
///
/// Wrapping is reported, never rendered: `text` is always the payload type and
/// the emitter decides whether to put it inside a pagination container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedType {
  pub text: String,
  pub depends_on: IndexSet<TypeName>,
  pub is_wrapped: bool,
  pub wrapper_kind: Option<TypeName>,
  pub pageable: bool,
}

impl ResolvedType {
  fn plain(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      ..Self::default()
    }
  }

  fn map_text(mut self, f: impl FnOnce(&str) -> String) -> Self {
    self.text = f(&self.text);
    self
  }
}

/// Converts schema nodes into TypeScript type expressions.
///
/// References are leaves: only the name in the pointer is decoded and the
/// referenced body is never expanded, so cyclic definitions terminate.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
  wrappers: WrapperSet,
}

impl TypeResolver {
  #[must_use]
  pub fn new(wrappers: WrapperSet) -> Self {
    Self { wrappers }
  }

  /// Resolves `node` on behalf of the unit named `owner`, registering every
  /// referenced definition other than `owner` with `collector`.
  pub fn resolve(
    &self,
    node: &SchemaNode,
    collector: &mut DependencyCollector,
    owner: &str,
  ) -> ResolveResult<ResolvedType> {
    self.resolve_at(node, collector, owner, 0)
  }

  /// Validates a raw JSON fragment, then resolves it. The validated node is
  /// handed back for callers that still need its metadata.
  pub fn resolve_value(
    &self,
    value: &Value,
    collector: &mut DependencyCollector,
    owner: &str,
  ) -> ResolveResult<(SchemaNode, ResolvedType)> {
    let node = SchemaNode::from_value(value)?;
    let resolved = self.resolve(&node, collector, owner)?;
    Ok((node, resolved))
  }

  fn resolve_at(
    &self,
    node: &SchemaNode,
    collector: &mut DependencyCollector,
    owner: &str,
    depth: usize,
  ) -> ResolveResult<ResolvedType> {
    if depth >= MAX_RESOLVE_DEPTH {
      return Err(ResolveError::recursion_limit());
    }

    match &node.kind {
      SchemaKind::Primitive(kind) => Ok(ResolvedType::plain(primitive_text(*kind))),
      SchemaKind::ArrayOf(items) => Ok(
        self
          .resolve_at(items, collector, owner, depth + 1)?
          .map_text(|inner| format!("{inner}[]")),
      ),
      SchemaKind::ObjectMap(Some(value_type)) => Ok(
        self
          .resolve_at(value_type, collector, owner, depth + 1)?
          .map_text(|inner| format!("{{ [k: string]: {inner} }}")),
      ),
      SchemaKind::ObjectMap(None) => Ok(ResolvedType::plain(TS_OPEN_MAP)),
      SchemaKind::Indirect(inner) => self.resolve_at(inner, collector, owner, depth + 1),
      SchemaKind::Reference(raw) => self.resolve_reference(raw, collector, owner),
    }
  }

  fn resolve_reference(
    &self,
    raw: &str,
    collector: &mut DependencyCollector,
    owner: &str,
  ) -> ResolveResult<ResolvedType> {
    let name = parse_definition_ref(raw)?;
    let chain = parse_layers(name)?;
    let class = classify_wrapper(&chain, &self.wrappers);

    let mut resolved = ResolvedType::plain(class.innermost.as_str());
    if class.innermost.as_str() != owner {
      collector.add(class.innermost.clone(), owner);
      resolved.depends_on.insert(class.innermost);
    }

    if chain.is_generic() {
      resolved.is_wrapped = true;
      resolved.wrapper_kind = Some(chain.outermost().clone());
      resolved.pageable = class.pageable;
    }

    Ok(resolved)
  }
}

/// Fixed lookup; no other node field influences a primitive's text.
#[must_use]
pub const fn primitive_text(kind: PrimitiveKind) -> &'static str {
  match kind {
    PrimitiveKind::String => TS_STRING,
    PrimitiveKind::Number => TS_NUMBER,
    PrimitiveKind::Boolean => TS_BOOLEAN,
    PrimitiveKind::Binary => TS_BINARY,
  }
}
