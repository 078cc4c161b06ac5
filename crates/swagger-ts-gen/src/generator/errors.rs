use serde_json::Value;
use thiserror::Error;

/// Maximum nesting depth accepted while classifying or resolving a schema node.
pub(crate) const MAX_RESOLVE_DEPTH: usize = 64;

/// Failure local to a single output unit (one definition or one operation).
///
/// Resolution is pure, so none of these are retryable: the input itself must change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
  #[error("invalid reference '{reference}': {reason}")]
  RefParse { reference: String, reason: &'static str },

  #[error("malformed generic name '{name}': {reason}")]
  GenericNesting { name: String, reason: &'static str },

  #[error("unrecognized schema node: {node}")]
  UnknownType { node: Value },

  #[error("schema nesting exceeds the limit of {limit} levels")]
  RecursionLimit { limit: usize },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

impl ResolveError {
  pub(crate) fn ref_parse(reference: impl Into<String>, reason: &'static str) -> Self {
    Self::RefParse {
      reference: reference.into(),
      reason,
    }
  }

  pub(crate) fn generic_nesting(name: impl Into<String>, reason: &'static str) -> Self {
    Self::GenericNesting {
      name: name.into(),
      reason,
    }
  }

  pub(crate) fn unknown_type(node: &Value) -> Self {
    Self::UnknownType { node: node.clone() }
  }

  pub(crate) const fn recursion_limit() -> Self {
    Self::RecursionLimit {
      limit: MAX_RESOLVE_DEPTH,
    }
  }

  /// Stable kind name used when reporting skipped units.
  #[must_use]
  pub const fn kind(&self) -> &'static str {
    match self {
      Self::RefParse { .. } => "RefParseError",
      Self::GenericNesting { .. } => "GenericNestingError",
      Self::UnknownType { .. } => "UnknownTypeError",
      Self::RecursionLimit { .. } => "RecursionLimitError",
    }
  }
}
