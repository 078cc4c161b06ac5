use std::collections::HashSet;

use serde_json::Value;

use super::{
  ast::{
    ANGULAR_HTTP_MODULE, ArgumentDef, Documentation, ImportSet, MethodDef, PAGEABLE_REQUEST_BODY,
    PAGEABLE_RESPONSE_BODY, ParamLocation, ReturnKind,
  },
  config::CodegenConfig,
  converter::{DependencyCollector, ResolvedType, TypeResolver},
  errors::ResolveResult,
  schema::OperationEntry,
};
use crate::naming::identifiers::{ensure_unique, escape_single_quoted, to_ts_identifier, url_template};

const DEFAULT_BODY_NAME: &str = "body";

/// A converted service method and everything its file must import.
#[derive(Debug, Clone)]
pub(crate) struct ConvertedMethod {
  pub(crate) method: MethodDef,
  pub(crate) dependencies: DependencyCollector,
  pub(crate) imports: ImportSet,
}

/// Converts one operation into an Angular `HttpClient` call.
pub(crate) struct OperationConverter<'a> {
  resolver: &'a TypeResolver,
  config: &'a CodegenConfig,
}

impl<'a> OperationConverter<'a> {
  pub(crate) fn new(resolver: &'a TypeResolver, config: &'a CodegenConfig) -> Self {
    Self { resolver, config }
  }

  /// `name` is the method's final, service-unique name and owns the dependency set.
  pub(crate) fn convert(&self, entry: &OperationEntry<'_>, name: &str) -> ResolveResult<ConvertedMethod> {
    let mut collector = DependencyCollector::new();
    let mut imports = ImportSet::new();

    let mut arguments = self.convert_parameters(entry, name, &mut collector, &mut imports)?;
    drop_optional_form_data(&mut arguments);
    arguments.sort_by_key(|arg| !arg.is_mandatory());

    for arg in &arguments {
      match arg.location {
        ParamLocation::Query => imports.add(ANGULAR_HTTP_MODULE, "HttpParams"),
        ParamLocation::Header => imports.add(ANGULAR_HTTP_MODULE, "HttpHeaders"),
        ParamLocation::Path | ParamLocation::Body | ParamLocation::FormData => {}
      }
    }

    let body = arguments
      .iter()
      .find(|arg| arg.location == ParamLocation::Body)
      .or_else(|| arguments.iter().find(|arg| arg.location == ParamLocation::FormData))
      .map(|arg| arg.name.clone());

    let returns = self.convert_return(entry, name, &mut collector, &mut imports)?;

    let method = MethodDef::builder()
      .name(name)
      .docs(operation_docs(entry))
      .http_method(entry.method)
      .url(url_template(entry.path))
      .arguments(arguments)
      .maybe_body(body)
      .returns(returns)
      .build();

    Ok(ConvertedMethod {
      method,
      dependencies: collector,
      imports,
    })
  }

  fn convert_parameters(
    &self,
    entry: &OperationEntry<'_>,
    owner: &str,
    collector: &mut DependencyCollector,
    imports: &mut ImportSet,
  ) -> ResolveResult<Vec<ArgumentDef>> {
    let mut used_names = HashSet::new();
    let mut arguments = Vec::with_capacity(entry.parameters.len());

    for value in &entry.parameters {
      let (node, resolved) = self.resolver.resolve_value(value, collector, owner)?;

      let original_name = value.get("name").and_then(Value::as_str).unwrap_or(DEFAULT_BODY_NAME);
      let location = value
        .get("in")
        .and_then(Value::as_str)
        .and_then(|location| location.parse().ok())
        .unwrap_or(ParamLocation::Query);

      let ts_type = match location {
        ParamLocation::Body if resolved.pageable => {
          imports.add(&self.config.plugins_module, PAGEABLE_REQUEST_BODY);
          format!("{PAGEABLE_REQUEST_BODY}<{}>", resolved.text)
        }
        _ => resolved.text,
      };

      arguments.push(
        ArgumentDef::builder()
          .name(ensure_unique(&to_ts_identifier(original_name), &mut used_names))
          .original_name(original_name)
          .ts_type(ts_type)
          .location(location)
          .optional(node.optionality.is_optional_or(location == ParamLocation::Path))
          .maybe_default_value(node.default.as_ref().map(render_default))
          .build(),
      );
    }

    Ok(arguments)
  }

  fn convert_return(
    &self,
    entry: &OperationEntry<'_>,
    owner: &str,
    collector: &mut DependencyCollector,
    imports: &mut ImportSet,
  ) -> ResolveResult<ReturnKind> {
    let Some(schema) = entry
      .operation
      .success_response()
      .and_then(|response| response.schema.as_ref())
    else {
      return Ok(ReturnKind::Void);
    };

    let (node, ResolvedType { text, pageable, .. }) = self.resolver.resolve_value(schema, collector, owner)?;

    if pageable {
      imports.add(&self.config.plugins_module, PAGEABLE_RESPONSE_BODY);
      return Ok(ReturnKind::Pageable(text));
    }
    if node.is_binary_payload() {
      imports.add(ANGULAR_HTTP_MODULE, "HttpResponse");
      return Ok(ReturnKind::Blob);
    }
    Ok(ReturnKind::Json(text))
  }
}

/// With both required and optional form fields present, only the required ones
/// are kept so a single form payload is sent.
fn drop_optional_form_data(arguments: &mut Vec<ArgumentDef>) {
  let form_data = |arg: &&ArgumentDef| arg.location == ParamLocation::FormData;
  let has_required = arguments.iter().filter(form_data).any(|arg| !arg.optional);
  let has_optional = arguments.iter().filter(form_data).any(|arg| arg.optional);

  if has_required && has_optional {
    arguments.retain(|arg| arg.location != ParamLocation::FormData || !arg.optional);
  }
}

fn operation_docs(entry: &OperationEntry<'_>) -> Documentation {
  let operation = entry.operation;
  let mut docs = Documentation::from_optional(operation.summary.as_deref());
  if let Some(description) = operation.description.as_deref()
    && operation.summary.as_deref() != Some(description)
  {
    for line in Documentation::from_raw(description).lines() {
      docs.push(line.clone());
    }
  }
  if operation.deprecated {
    docs.push("@deprecated");
  }
  docs
}

/// Renders a parameter default as a TypeScript literal.
fn render_default(value: &Value) -> String {
  match value {
    Value::String(s) => format!("'{}'", escape_single_quoted(s)),
    other => other.to_string(),
  }
}
