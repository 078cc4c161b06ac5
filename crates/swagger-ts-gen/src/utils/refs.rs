use crate::generator::errors::{ResolveError, ResolveResult};

pub(crate) const DEFINITION_REF_PREFIX: &str = "#/definitions/";

/// Extracts the definition name from a `#/definitions/<Name>` reference.
///
/// External documents and other JSON pointer targets are rejected; the returned
/// name may still carry encoded generics.
pub(crate) fn parse_definition_ref(reference: &str) -> ResolveResult<&str> {
  let name = reference
    .strip_prefix(DEFINITION_REF_PREFIX)
    .ok_or_else(|| ResolveError::ref_parse(reference, "expected a '#/definitions/' reference"))?;

  if name.trim().is_empty() {
    return Err(ResolveError::ref_parse(reference, "empty definition name"));
  }
  Ok(name)
}
