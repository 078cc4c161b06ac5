use itertools::Itertools;
use serde_json::Value;

use super::{
  ast::{Documentation, InterfaceDef, ModelDef, ModelKind, PAGEABLE_RESPONSE_BODY, PropertyDef, TypeAliasDef, TypeName},
  converter::{DependencyCollector, ResolvedType, TypeResolver},
  errors::ResolveResult,
  generics::parse_layers,
  schema::{Definition, SchemaNode},
};
use crate::naming::identifiers::{to_file_stem, ts_property_key};

const UNTYPED_ALIAS_TARGET: &str = "any";

/// Converts one definition into a model file declaration.
pub(crate) struct SchemaConverter<'a> {
  resolver: &'a TypeResolver,
}

impl<'a> SchemaConverter<'a> {
  pub(crate) fn new(resolver: &'a TypeResolver) -> Self {
    Self { resolver }
  }

  /// Returns `None` for generic instantiations such as `Page«UserDto»`; those
  /// are represented at their use sites and get no file of their own.
  pub(crate) fn convert(&self, definition: &Definition) -> ResolveResult<Option<ModelDef>> {
    if parse_layers(&definition.name)?.is_generic() {
      return Ok(None);
    }

    let owner = definition.name.as_str();
    let mut collector = DependencyCollector::new();
    let mut plugins = vec![];
    let docs = Documentation::from_optional(definition.description.as_deref().or(definition.title.as_deref()));

    let mut parents = vec![];
    for raw in &definition.parents {
      let parent = self
        .resolver
        .resolve(&SchemaNode::reference(raw.as_str()), &mut collector, owner)?;
      if parent.text != owner {
        parents.push(TypeName::from(parent.text));
      }
    }

    if !definition.has_properties() && parents.is_empty() {
      let alias = TypeAliasDef::builder()
        .name(definition.name.clone())
        .docs(docs)
        .target(UNTYPED_ALIAS_TARGET)
        .build();
      return Ok(Some(self.finish(definition, ModelKind::Alias(alias), collector, plugins)));
    }

    let mut properties = Vec::with_capacity(definition.properties.len());
    for (prop_name, value) in &definition.properties {
      let (node, resolved) = self.resolver.resolve_value(value, &mut collector, owner)?;
      let ts_type = property_type(&resolved, &mut plugins);

      properties.push(
        PropertyDef::builder()
          .name(ts_property_key(prop_name))
          .ts_type(ts_type)
          .optional(definition.is_property_optional(prop_name, &node))
          .docs(property_docs(&node))
          .build(),
      );
    }

    let interface = InterfaceDef::builder()
      .name(definition.name.clone())
      .docs(docs)
      .parents(parents)
      .properties(properties)
      .build();

    Ok(Some(self.finish(definition, ModelKind::Interface(interface), collector, plugins)))
  }

  fn finish(
    &self,
    definition: &Definition,
    kind: ModelKind,
    collector: DependencyCollector,
    plugins: Vec<String>,
  ) -> ModelDef {
    ModelDef {
      kind,
      imports: collector.to_import_list(),
      plugins,
      file_stem: to_file_stem(&definition.name),
    }
  }
}

/// Pageable payloads keep their container inside a model, unlike parameters
/// where the service method decides.
fn property_type(resolved: &ResolvedType, plugins: &mut Vec<String>) -> String {
  if !resolved.pageable {
    return resolved.text.clone();
  }
  if !plugins.iter().any(|name| name == PAGEABLE_RESPONSE_BODY) {
    plugins.push(PAGEABLE_RESPONSE_BODY.to_string());
  }
  format!("{PAGEABLE_RESPONSE_BODY}<{}>", resolved.text)
}

fn property_docs(node: &SchemaNode) -> Documentation {
  let mut docs = Documentation::from_optional(node.description.as_deref());
  if !node.enum_values.is_empty() {
    let values = node.enum_values.iter().map(render_enum_value).join(", ");
    docs.push(format!("Allowed values: {values}"));
  }
  docs
}

fn render_enum_value(value: &Value) -> String {
  match value {
    Value::String(s) => format!("'{s}'"),
    other => other.to_string(),
  }
}
