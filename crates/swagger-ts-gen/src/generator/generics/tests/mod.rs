use super::{DEFAULT_PAGEABLE_WRAPPERS, WrapperSet, classify_wrapper, parse_layers};
use crate::generator::{ast::TypeName, errors::ResolveError};

fn layer_names(name: &str) -> Vec<String> {
  parse_layers(name)
    .unwrap()
    .layers()
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_plain_name_is_single_layer() {
  let chain = parse_layers("UserDto").unwrap();
  assert_eq!(chain.len(), 1);
  assert!(!chain.is_generic());
  assert_eq!(chain.outermost(), chain.innermost());
  assert_eq!(chain.innermost().as_str(), "UserDto");
}

#[test]
fn test_nested_layers_outermost_first() {
  assert_eq!(
    layer_names("PaginationResponse«Page«OrderDto»»"),
    vec!["PaginationResponse", "Page", "OrderDto"]
  );
  assert_eq!(layer_names("Page«UserDto»"), vec!["Page", "UserDto"]);
}

#[test]
fn test_single_guillemets_peel_like_double() {
  assert_eq!(layer_names("Page‹UserDto›"), vec!["Page", "UserDto"]);
  assert_eq!(
    layer_names("PaginationResponse‹Page‹OrderDto››"),
    vec!["PaginationResponse", "Page", "OrderDto"]
  );

  let wrappers = WrapperSet::default();
  let class = classify_wrapper(&parse_layers("Page‹UserDto›").unwrap(), &wrappers);
  assert!(class.pageable);
  assert_eq!(class.innermost.as_str(), "UserDto");

  let class = classify_wrapper(&parse_layers("PaginationResponse‹Page‹OrderDto››").unwrap(), &wrappers);
  assert!(class.pageable);
  assert_eq!(class.innermost.as_str(), "OrderDto");
}

#[test]
fn test_mixed_pairs_nest_but_never_cross() {
  assert_eq!(
    layer_names("PaginationResponse«Page‹OrderDto›»"),
    vec!["PaginationResponse", "Page", "OrderDto"]
  );
  for name in ["Page«UserDto›", "Page‹UserDto»", "Page«Slice‹UserDto»›", "UserDto›"] {
    let err = parse_layers(name).unwrap_err();
    assert_eq!(err.kind(), "GenericNestingError", "{name}");
  }
}

#[test]
fn test_layer_names_are_trimmed() {
  assert_eq!(layer_names(" Page« UserDto »"), vec!["Page", "UserDto"]);
}

#[test]
fn test_empty_name_is_ref_parse_error() {
  let err = parse_layers("   ").unwrap_err();
  assert_eq!(err.kind(), "RefParseError");
}

#[test]
fn test_empty_generic_argument_is_ref_parse_error() {
  let err = parse_layers("Page«»").unwrap_err();
  assert_eq!(err.kind(), "RefParseError");
}

#[test]
fn test_missing_outer_name_is_ref_parse_error() {
  let err = parse_layers("«UserDto»").unwrap_err();
  assert_eq!(err.kind(), "RefParseError");
}

#[test]
fn test_unbalanced_delimiters_are_nesting_errors() {
  for name in ["Page«UserDto", "Page«Slice«UserDto»", "UserDto»", "Page»«UserDto»"] {
    let err = parse_layers(name).unwrap_err();
    assert!(
      matches!(err, ResolveError::GenericNesting { .. }),
      "{name}: expected nesting error, got {err:?}"
    );
  }
}

#[test]
fn test_trailing_text_is_nesting_error() {
  let err = parse_layers("Page«UserDto»Extra").unwrap_err();
  assert_eq!(err.kind(), "GenericNestingError");
}

#[test]
fn test_multi_argument_generic_is_rejected() {
  let err = parse_layers("Map«string,UserDto»").unwrap_err();
  assert_eq!(
    err,
    ResolveError::GenericNesting {
      name: "Map«string,UserDto»".to_string(),
      reason: "multi-argument generics are not supported",
    }
  );
}

#[test]
fn test_excessive_depth_hits_recursion_limit() {
  let depth = 100;
  let name = format!("{}UserDto{}", "Page«".repeat(depth), "»".repeat(depth));
  let err = parse_layers(&name).unwrap_err();
  assert_eq!(err.kind(), "RecursionLimitError");
}

#[test]
fn test_default_wrappers() {
  let wrappers = WrapperSet::default();
  for name in DEFAULT_PAGEABLE_WRAPPERS {
    assert!(wrappers.contains(&TypeName::from(*name)));
  }
  assert!(!wrappers.contains(&TypeName::from("ResponseEntity")));
}

#[test]
fn test_classify_recognized_wrapper_is_pageable() {
  let wrappers = WrapperSet::default();
  let class = classify_wrapper(&parse_layers("Page«UserDto»").unwrap(), &wrappers);
  assert!(class.pageable);
  assert_eq!(class.innermost.as_str(), "UserDto");
}

#[test]
fn test_classify_wrapper_anywhere_in_chain() {
  let wrappers = WrapperSet::default();
  let class = classify_wrapper(&parse_layers("ResponseEntity«Page«UserDto»»").unwrap(), &wrappers);
  assert!(class.pageable);
  assert_eq!(class.innermost.as_str(), "UserDto");
}

#[test]
fn test_classify_unrecognized_wrapper_is_transparent() {
  let wrappers = WrapperSet::default();
  let class = classify_wrapper(&parse_layers("ResponseEntity«UserDto»").unwrap(), &wrappers);
  assert!(!class.pageable);
  assert_eq!(class.innermost.as_str(), "UserDto");
}

#[test]
fn test_classify_payload_named_like_wrapper_is_not_pageable() {
  let wrappers = WrapperSet::default();
  let class = classify_wrapper(&parse_layers("Page").unwrap(), &wrappers);
  assert!(!class.pageable);
  assert_eq!(class.innermost.as_str(), "Page");
}

#[test]
fn test_custom_wrapper_set() {
  let wrappers = WrapperSet::new(["Slice"]);
  let chain = parse_layers("Slice«UserDto»").unwrap();
  assert!(classify_wrapper(&chain, &wrappers).pageable);
  let chain = parse_layers("Page«UserDto»").unwrap();
  assert!(!classify_wrapper(&chain, &wrappers).pageable);
}
