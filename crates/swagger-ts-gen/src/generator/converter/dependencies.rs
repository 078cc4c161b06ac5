use indexmap::IndexSet;

use crate::generator::ast::TypeName;

/// Names one output unit must import, in first-added order.
///
/// Each interface or service method owns its own collector for the duration of
/// its generation; the owner's own name is never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyCollector {
  names: IndexSet<TypeName>,
}

impl DependencyCollector {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `name` unless it is empty or the owner itself. Returns whether it was new.
  pub fn add(&mut self, name: impl Into<TypeName>, owner: &str) -> bool {
    let name = name.into();
    if name.is_empty() || name.as_str() == owner {
      return false;
    }
    self.names.insert(name)
  }

  /// Appends another unit's names after this collector's own.
  pub fn merge(&mut self, other: &DependencyCollector, owner: &str) {
    for name in &other.names {
      self.add(name.clone(), owner);
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &TypeName> {
    self.names.iter()
  }

  #[must_use]
  pub fn to_import_list(&self) -> Vec<TypeName> {
    self.names.iter().cloned().collect()
  }
}
