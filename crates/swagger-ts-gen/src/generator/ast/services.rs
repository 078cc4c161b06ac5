use strum::{Display, EnumString};

use super::{Documentation, ImportSet};
use crate::generator::schema::HttpMethod;

pub(crate) const PAGEABLE_RESPONSE_BODY: &str = "PageableResponseBody";
pub(crate) const PAGEABLE_REQUEST_BODY: &str = "PageableRequestBody";

/// Where a Swagger 2.0 parameter is carried (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ParamLocation {
  Path,
  Query,
  Header,
  Body,
  FormData,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ArgumentDef {
  /// TypeScript identifier.
  #[builder(into)]
  pub name: String,
  /// Name on the wire.
  #[builder(into)]
  pub original_name: String,
  #[builder(into)]
  pub ts_type: String,
  pub location: ParamLocation,
  #[builder(default)]
  pub optional: bool,
  /// Default value already rendered as a TypeScript literal.
  pub default_value: Option<String>,
}

impl ArgumentDef {
  /// Arguments without a default that must be passed come first in the signature.
  #[must_use]
  pub const fn is_mandatory(&self) -> bool {
    !self.optional && self.default_value.is_none()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnKind {
  Void,
  Json(String),
  Pageable(String),
  /// `type: file` and `format: byte` responses, downloaded as a full `HttpResponse<Blob>`.
  Blob,
}

impl ReturnKind {
  #[must_use]
  pub fn ts_type(&self) -> String {
    match self {
      Self::Void => "void".to_string(),
      Self::Json(text) => text.clone(),
      Self::Pageable(text) => format!("{PAGEABLE_RESPONSE_BODY}<{text}>"),
      Self::Blob => "HttpResponse<Blob>".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct MethodDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub http_method: HttpMethod,
  /// URL as a template literal body, e.g. `/users/${id}`.
  #[builder(into)]
  pub url: String,
  #[builder(default)]
  pub arguments: Vec<ArgumentDef>,
  /// Identifier of the argument sent as the request body.
  pub body: Option<String>,
  pub returns: ReturnKind,
}

impl MethodDef {
  pub fn arguments_in(&self, location: ParamLocation) -> impl Iterator<Item = &ArgumentDef> {
    self.arguments.iter().filter(move |arg| arg.location == location)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ServiceDef {
  #[builder(into)]
  pub class_name: String,
  #[builder(into)]
  pub file_stem: String,
  /// Document `basePath`, prefixed to every request URL.
  #[builder(default)]
  pub base_path: String,
  #[builder(default)]
  pub methods: Vec<MethodDef>,
  #[builder(default)]
  pub imports: ImportSet,
}
