use super::generics::WrapperSet;

pub(crate) const DEFAULT_DTO_MODULE: &str = "@private-dto";
pub(crate) const DEFAULT_PLUGINS_MODULE: &str = "@models/plugins";

/// Settings shared by every unit of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CodegenConfig {
  #[builder(default)]
  pub wrappers: WrapperSet,
  /// Module services import DTO interfaces from.
  #[builder(default = DEFAULT_DTO_MODULE.to_string())]
  pub dto_module: String,
  /// Module providing `PageableResponseBody` and `PageableRequestBody`.
  #[builder(default = DEFAULT_PLUGINS_MODULE.to_string())]
  pub plugins_module: String,
  #[builder(default = true)]
  pub emit_models: bool,
  #[builder(default = true)]
  pub emit_services: bool,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}
