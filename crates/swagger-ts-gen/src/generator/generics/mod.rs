//! Decoding of definition names that encode generics, such as
//! `PaginationResponse«Page«OrderDto»»` or `Page‹UserDto›`.
//!
//! Each step peels exactly one outer layer: the text before the first opening
//! guillemet names the layer and the span up to the closer of the same pair is
//! decoded next. That closer must end the remainder, so a chain is always a
//! straight line of single-argument wrappers ending in the payload type.

use std::collections::BTreeSet;

use crate::generator::{
  ast::TypeName,
  errors::{MAX_RESOLVE_DEPTH, ResolveError, ResolveResult},
};

/// Opening and closing delimiters, double (`«»`) and single (`‹›`) guillemets.
const DELIMITER_PAIRS: [(char, char); 2] = [('«', '»'), ('‹', '›')];
const ARGUMENT_SEPARATOR: char = ',';

pub const DEFAULT_PAGEABLE_WRAPPERS: &[&str] = &["Page", "PaginationResponse"];

/// Decoded layers of one definition name, outermost first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericChain {
  layers: Vec<TypeName>,
}

impl GenericChain {
  #[must_use]
  pub fn layers(&self) -> &[TypeName] {
    &self.layers
  }

  #[must_use]
  pub fn outermost(&self) -> &TypeName {
    &self.layers[0]
  }

  #[must_use]
  pub fn innermost(&self) -> &TypeName {
    &self.layers[self.layers.len() - 1]
  }

  /// More than one layer, i.e. the name wraps a payload type.
  #[must_use]
  pub fn is_generic(&self) -> bool {
    self.layers.len() > 1
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.layers.len()
  }
}

/// Outer generic names that mark a payload as a paged collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSet {
  names: BTreeSet<TypeName>,
}

impl Default for WrapperSet {
  fn default() -> Self {
    Self::new(DEFAULT_PAGEABLE_WRAPPERS.iter().copied())
  }
}

impl WrapperSet {
  pub fn new<I, T>(names: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<TypeName>,
  {
    Self {
      names: names.into_iter().map(Into::into).collect(),
    }
  }

  #[must_use]
  pub fn contains(&self, name: &TypeName) -> bool {
    self.names.contains(name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperClass {
  pub pageable: bool,
  pub innermost: TypeName,
}

/// Splits a definition name into its generic layers, outermost first.
pub fn parse_layers(name: &str) -> ResolveResult<GenericChain> {
  let mut layers = vec![];
  peel(name, name, &mut layers, 0)?;
  Ok(GenericChain { layers })
}

/// The innermost layer is always the payload; any recognized wrapper among the
/// outer layers makes the chain pageable. Other wrappers are transparent.
#[must_use]
pub fn classify_wrapper(chain: &GenericChain, wrappers: &WrapperSet) -> WrapperClass {
  let layers = chain.layers();
  let outer = &layers[..layers.len() - 1];

  WrapperClass {
    pageable: outer.iter().any(|layer| wrappers.contains(layer)),
    innermost: chain.innermost().clone(),
  }
}

fn peel(full: &str, remainder: &str, layers: &mut Vec<TypeName>, depth: usize) -> ResolveResult<()> {
  if depth >= MAX_RESOLVE_DEPTH {
    return Err(ResolveError::recursion_limit());
  }

  let remainder = remainder.trim();
  if remainder.is_empty() {
    return Err(ResolveError::ref_parse(full, "empty definition name"));
  }

  let Some((open, (opener, closer))) = first_opener(remainder) else {
    if remainder.contains(is_closer) {
      return Err(ResolveError::generic_nesting(full, "closing delimiter without an opening one"));
    }
    check_single_argument(full, remainder)?;
    layers.push(TypeName::from(remainder));
    return Ok(());
  };

  let close = matching_close(remainder, open, opener, closer)
    .ok_or_else(|| ResolveError::generic_nesting(full, "opening delimiter is never closed"))?;
  if close + closer.len_utf8() != remainder.len() {
    return Err(ResolveError::generic_nesting(full, "text follows the closing delimiter"));
  }

  let outer = remainder[..open].trim();
  if outer.is_empty() {
    return Err(ResolveError::ref_parse(full, "generic layer has no name"));
  }
  if outer.contains(is_closer) {
    return Err(ResolveError::generic_nesting(full, "closing delimiter without an opening one"));
  }
  check_single_argument(full, outer)?;
  layers.push(TypeName::from(outer));

  peel(full, &remainder[open + opener.len_utf8()..close], layers, depth + 1)
}

fn first_opener(text: &str) -> Option<(usize, (char, char))> {
  text.char_indices().find_map(|(offset, ch)| {
    DELIMITER_PAIRS
      .iter()
      .find(|(opener, _)| *opener == ch)
      .map(|pair| (offset, *pair))
  })
}

fn is_closer(ch: char) -> bool {
  DELIMITER_PAIRS.iter().any(|(_, closer)| *closer == ch)
}

/// Only the opener's own pair is counted, so the other pair may nest inside it.
fn matching_close(text: &str, open: usize, opener: char, closer: char) -> Option<usize> {
  let mut depth = 0usize;
  for (offset, ch) in text[open..].char_indices() {
    if ch == opener {
      depth += 1;
    } else if ch == closer {
      depth -= 1;
      if depth == 0 {
        return Some(open + offset);
      }
    }
  }
  None
}

fn check_single_argument(full: &str, layer: &str) -> ResolveResult<()> {
  if layer.contains(ARGUMENT_SEPARATOR) {
    return Err(ResolveError::generic_nesting(full, "multi-argument generics are not supported"));
  }
  Ok(())
}

#[cfg(test)]
mod tests;
