use serde_json::{Map, Value};

use crate::generator::errors::{MAX_RESOLVE_DEPTH, ResolveError, ResolveResult};

const FIELD_TYPE: &str = "type";
const FIELD_SCHEMA: &str = "schema";
const FIELD_REF: &str = "$ref";
const FIELD_ITEMS: &str = "items";
const FIELD_ADDITIONAL_PROPERTIES: &str = "additionalProperties";

/// Scalar kinds a Swagger 2.0 `type` keyword can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
  String,
  Number,
  Boolean,
  Binary,
}

/// The one shape a validated schema fragment takes.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
  Primitive(PrimitiveKind),
  ArrayOf(Box<SchemaNode>),
  /// `None` is an open, untyped map.
  ObjectMap(Option<Box<SchemaNode>>),
  Reference(String),
  /// Parameter-style wrapper whose payload lives under `schema`.
  Indirect(Box<SchemaNode>),
}

/// Raw optionality signals as they appear on the node.
///
/// `required` wins when present; `allowEmptyValue` is only consulted without it.
/// A member carrying neither is required unless the caller supplies another
/// default through [`Optionality::is_optional_or`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optionality {
  pub required: Option<bool>,
  pub allow_empty_value: Option<bool>,
}

impl Optionality {
  #[must_use]
  pub const fn is_optional(self) -> bool {
    self.is_optional_or(true)
  }

  /// Same precedence as [`Optionality::is_optional`], with `required_by_default`
  /// deciding a member that carries neither flag.
  #[must_use]
  pub const fn is_optional_or(self, required_by_default: bool) -> bool {
    match (self.required, self.allow_empty_value) {
      (Some(required), _) => !required,
      (None, Some(allow_empty)) => allow_empty,
      (None, None) => !required_by_default,
    }
  }

  #[must_use]
  pub const fn with_required_fallback(self, required: Option<bool>) -> Self {
    match self.required {
      Some(_) => self,
      None => Self {
        required,
        allow_empty_value: self.allow_empty_value,
      },
    }
  }
}

/// A normalized schema, parameter or items fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
  pub kind: SchemaKind,
  pub description: Option<String>,
  pub format: Option<String>,
  pub enum_values: Vec<Value>,
  pub default: Option<Value>,
  pub optionality: Optionality,
}

impl SchemaNode {
  #[must_use]
  pub fn new(kind: SchemaKind) -> Self {
    Self {
      kind,
      description: None,
      format: None,
      enum_values: vec![],
      default: None,
      optionality: Optionality::default(),
    }
  }

  #[must_use]
  pub fn primitive(kind: PrimitiveKind) -> Self {
    Self::new(SchemaKind::Primitive(kind))
  }

  #[must_use]
  pub fn array_of(items: SchemaNode) -> Self {
    Self::new(SchemaKind::ArrayOf(Box::new(items)))
  }

  #[must_use]
  pub fn map_of(value_type: Option<SchemaNode>) -> Self {
    Self::new(SchemaKind::ObjectMap(value_type.map(Box::new)))
  }

  #[must_use]
  pub fn reference(raw: impl Into<String>) -> Self {
    Self::new(SchemaKind::Reference(raw.into()))
  }

  #[must_use]
  pub fn indirect(inner: SchemaNode) -> Self {
    Self::new(SchemaKind::Indirect(Box::new(inner)))
  }

  /// Validates a raw JSON fragment into a node.
  ///
  /// Field precedence is `type`, then `schema`, then `$ref`. A fragment with none
  /// of them, an unknown `type`, or an array without `items` is rejected.
  pub fn from_value(value: &Value) -> ResolveResult<Self> {
    Self::classify(value, 0)
  }

  #[must_use]
  pub fn is_byte_format(&self) -> bool {
    self.format.as_deref() == Some("byte")
  }

  /// `type: file` or `format: byte`, which the service emitter downloads as a blob.
  #[must_use]
  pub fn is_binary_payload(&self) -> bool {
    matches!(self.kind, SchemaKind::Primitive(PrimitiveKind::Binary)) || self.is_byte_format()
  }

  fn classify(value: &Value, depth: usize) -> ResolveResult<Self> {
    if depth >= MAX_RESOLVE_DEPTH {
      return Err(ResolveError::recursion_limit());
    }

    let Some(object) = value.as_object() else {
      return Err(ResolveError::unknown_type(value));
    };

    let node = if let Some(type_value) = object.get(FIELD_TYPE) {
      Self::classify_typed(value, type_value, object, depth)?
    } else if let Some(inner) = object.get(FIELD_SCHEMA) {
      Self::indirect(Self::classify(inner, depth + 1)?)
    } else if let Some(reference) = object.get(FIELD_REF) {
      let raw = reference.as_str().ok_or_else(|| ResolveError::unknown_type(value))?;
      Self::reference(raw)
    } else {
      return Err(ResolveError::unknown_type(value));
    };

    Ok(Self {
      description: string_field(object, "description"),
      format: string_field(object, "format"),
      enum_values: object
        .get("enum")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default(),
      default: object.get("default").cloned(),
      optionality: Optionality {
        required: object.get("required").and_then(Value::as_bool),
        allow_empty_value: object.get("allowEmptyValue").and_then(Value::as_bool),
      },
      ..node
    })
  }

  fn classify_typed(
    value: &Value,
    type_value: &Value,
    object: &Map<String, Value>,
    depth: usize,
  ) -> ResolveResult<Self> {
    let Some(type_name) = type_value.as_str() else {
      return Err(ResolveError::unknown_type(value));
    };

    let node = match type_name {
      "string" => Self::primitive(PrimitiveKind::String),
      "boolean" => Self::primitive(PrimitiveKind::Boolean),
      "integer" | "number" => Self::primitive(PrimitiveKind::Number),
      "file" => Self::primitive(PrimitiveKind::Binary),
      "array" => {
        let items = object
          .get(FIELD_ITEMS)
          .ok_or_else(|| ResolveError::unknown_type(value))?;
        Self::array_of(Self::classify(items, depth + 1)?)
      }
      "object" => {
        let value_type = match object.get(FIELD_ADDITIONAL_PROPERTIES) {
          Some(additional) if is_typed_fragment(additional) => Some(Self::classify(additional, depth + 1)?),
          _ => None,
        };
        Self::map_of(value_type)
      }
      _ => return Err(ResolveError::unknown_type(value)),
    };

    Ok(node)
  }
}

/// `additionalProperties: true` and `{}` both mean "any value".
fn is_typed_fragment(value: &Value) -> bool {
  value
    .as_object()
    .is_some_and(|object| [FIELD_TYPE, FIELD_SCHEMA, FIELD_REF].iter().any(|key| object.contains_key(*key)))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
  object.get(key).and_then(Value::as_str).map(String::from)
}
