use indexmap::{IndexMap, IndexSet};

pub(crate) const ANGULAR_CORE_MODULE: &str = "@angular/core";
pub(crate) const ANGULAR_HTTP_MODULE: &str = "@angular/common/http";
pub(crate) const RXJS_MODULE: &str = "rxjs";

/// Named imports grouped by module, both in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
  modules: IndexMap<String, IndexSet<String>>,
}

impl ImportSet {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, module: &str, name: impl Into<String>) {
    self.modules.entry(module.to_string()).or_default().insert(name.into());
  }

  pub fn extend<I, T>(&mut self, module: &str, names: I)
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    for name in names {
      self.add(module, name);
    }
  }

  pub fn merge(&mut self, other: &ImportSet) {
    for (module, names) in &other.modules {
      self.extend(module, names.iter().cloned());
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
    self.modules.iter().map(|(module, names)| (module.as_str(), names))
  }
}
