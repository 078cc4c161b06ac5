use super::{Documentation, TypeName};

/// One member of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PropertyDef {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub ts_type: String,
  #[builder(default)]
  pub optional: bool,
  #[builder(default)]
  pub docs: Documentation,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct InterfaceDef {
  pub name: TypeName,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub parents: Vec<TypeName>,
  #[builder(default)]
  pub properties: Vec<PropertyDef>,
}

/// `export type <Name> = <target>;`, used for bodies without properties.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct TypeAliasDef {
  pub name: TypeName,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(into)]
  pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelKind {
  Interface(InterfaceDef),
  Alias(TypeAliasDef),
}

/// A model file: one declaration plus what it imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
  pub kind: ModelKind,
  /// Sibling model files, in first-use order.
  pub imports: Vec<TypeName>,
  /// Names taken from the plugins module (pagination containers).
  pub plugins: Vec<String>,
  pub file_stem: String,
}

impl ModelDef {
  #[must_use]
  pub fn name(&self) -> &TypeName {
    match &self.kind {
      ModelKind::Interface(def) => &def.name,
      ModelKind::Alias(def) => &def.name,
    }
  }

  #[must_use]
  pub const fn is_interface(&self) -> bool {
    matches!(self.kind, ModelKind::Interface(_))
  }
}
