use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{SchemaNode, document::SwaggerDocument};
use crate::generator::ast::TypeName;

/// One named schema body from the document's `definitions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
  pub name: TypeName,
  pub title: Option<String>,
  pub description: Option<String>,
  pub properties: IndexMap<String, Value>,
  /// The body's `required` list, when it declares one.
  pub required: Option<Vec<String>>,
  /// Raw `$ref` strings of `allOf` parents.
  pub parents: Vec<String>,
}

impl Definition {
  /// Reads a definition body. For `allOf` compositions the last inline member
  /// carries the body and the `$ref` members become parents.
  #[must_use]
  pub fn from_value(name: impl Into<TypeName>, value: &Value) -> Self {
    let mut parents = vec![];
    let mut body = value.as_object();

    if let Some(all_of) = value.get("allOf").and_then(Value::as_array) {
      parents = all_of
        .iter()
        .filter_map(|member| member.get("$ref").and_then(Value::as_str))
        .map(String::from)
        .collect();
      body = all_of
        .iter()
        .rev()
        .filter_map(Value::as_object)
        .find(|member| !member.contains_key("$ref"));
    }

    let empty = Map::new();
    let body = body.unwrap_or(&empty);

    Self {
      name: name.into(),
      title: body.get("title").and_then(Value::as_str).map(String::from),
      description: body.get("description").and_then(Value::as_str).map(String::from),
      properties: body
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| props.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default(),
      required: body.get("required").and_then(Value::as_array).map(|names| {
        names
          .iter()
          .filter_map(Value::as_str)
          .map(String::from)
          .collect()
      }),
      parents,
    }
  }

  #[must_use]
  pub fn has_properties(&self) -> bool {
    !self.properties.is_empty()
  }

  /// Whether a property is optional, applying the definition's `required` list
  /// when the property itself carries no `required` flag.
  #[must_use]
  pub fn is_property_optional(&self, property: &str, node: &SchemaNode) -> bool {
    let listed = self
      .required
      .as_ref()
      .map(|names| names.iter().any(|name| name == property));
    node.optionality.with_required_fallback(listed).is_optional()
  }
}

/// Read-only table of every definition, in document order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
  definitions: IndexMap<TypeName, Definition>,
}

impl DefinitionTable {
  #[must_use]
  pub fn from_document(document: &SwaggerDocument) -> Self {
    let definitions = document
      .definitions
      .iter()
      .map(|(name, body)| {
        let name = TypeName::new(name);
        (name.clone(), Definition::from_value(name, body))
      })
      .collect();
    Self { definitions }
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.definitions.contains_key(&TypeName::new(name))
  }

  pub fn iter(&self) -> impl Iterator<Item = &Definition> {
    self.definitions.values()
  }
}
