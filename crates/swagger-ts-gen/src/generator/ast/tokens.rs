use std::{
  fmt::{Display, Formatter},
  ops::Deref,
};

use string_cache::DefaultAtom;

/// Interned name of a definition (the path component after `#/definitions/`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(DefaultAtom);

impl TypeName {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeName {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for TypeName {
  fn from(s: String) -> Self {
    Self(DefaultAtom::from(s))
  }
}

impl From<&String> for TypeName {
  fn from(s: &String) -> Self {
    Self::new(s)
  }
}

impl Deref for TypeName {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for TypeName {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl PartialEq<str> for TypeName {
  fn eq(&self, other: &str) -> bool {
    &*self.0 == other
  }
}

impl PartialEq<&str> for TypeName {
  fn eq(&self, other: &&str) -> bool {
    &*self.0 == *other
  }
}

impl Display for TypeName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}
