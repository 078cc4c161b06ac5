use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use strum::{AsRefStr, Display};

/// The subset of a Swagger 2.0 document the generator reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
  #[serde(default)]
  pub swagger: Option<String>,
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub base_path: Option<String>,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub definitions: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
}

impl HttpMethod {
  /// Methods whose Angular `HttpClient` call takes a body argument.
  #[must_use]
  pub const fn takes_body(self) -> bool {
    matches!(self, Self::Post | Self::Put | Self::Patch)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
  #[serde(default)]
  pub parameters: Vec<Value>,
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
}

impl PathItem {
  pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    [
      (HttpMethod::Get, &self.get),
      (HttpMethod::Put, &self.put),
      (HttpMethod::Post, &self.post),
      (HttpMethod::Delete, &self.delete),
      (HttpMethod::Options, &self.options),
      (HttpMethod::Head, &self.head),
      (HttpMethod::Patch, &self.patch),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub parameters: Vec<Value>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
  #[serde(default)]
  pub deprecated: bool,
}

impl Operation {
  /// The `200` response, falling back to the first other `2xx` entry.
  #[must_use]
  pub fn success_response(&self) -> Option<&Response> {
    self.responses.get("200").or_else(|| {
      self
        .responses
        .iter()
        .find(|(code, _)| code.starts_with('2'))
        .map(|(_, response)| response)
    })
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub schema: Option<Value>,
}

/// One operation together with the parameters inherited from its path item.
#[derive(Debug, Clone)]
pub struct OperationEntry<'a> {
  pub path: &'a str,
  pub method: HttpMethod,
  pub operation: &'a Operation,
  pub parameters: Vec<&'a Value>,
}

impl OperationEntry<'_> {
  /// First tag, or `default` for untagged operations.
  #[must_use]
  pub fn service_tag(&self) -> &str {
    self.operation.tags.first().map_or("default", String::as_str)
  }
}

impl SwaggerDocument {
  /// Operations in document order, path-level parameters first.
  #[must_use]
  pub fn operations(&self) -> Vec<OperationEntry<'_>> {
    self
      .paths
      .iter()
      .flat_map(|(path, item)| {
        item.operations().map(move |(method, operation)| OperationEntry {
          path: path.as_str(),
          method,
          operation,
          parameters: item.parameters.iter().chain(&operation.parameters).collect(),
        })
      })
      .collect()
  }
}
