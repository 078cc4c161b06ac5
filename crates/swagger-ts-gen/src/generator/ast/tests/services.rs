use crate::generator::ast::{ArgumentDef, ParamLocation, ReturnKind};

#[test]
fn test_param_location_parses_swagger_names() {
  assert_eq!("formData".parse::<ParamLocation>().unwrap(), ParamLocation::FormData);
  assert_eq!("query".parse::<ParamLocation>().unwrap(), ParamLocation::Query);
  assert!("cookie".parse::<ParamLocation>().is_err());
  assert_eq!(ParamLocation::Header.to_string(), "header");
}

#[test]
fn test_mandatory_arguments() {
  let required = ArgumentDef::builder()
    .name("id")
    .original_name("id")
    .ts_type("number")
    .location(ParamLocation::Path)
    .build();
  assert!(required.is_mandatory());

  let optional = ArgumentDef::builder()
    .name("page")
    .original_name("page")
    .ts_type("number")
    .location(ParamLocation::Query)
    .optional(true)
    .build();
  assert!(!optional.is_mandatory());

  let defaulted = ArgumentDef::builder()
    .name("size")
    .original_name("size")
    .ts_type("number")
    .location(ParamLocation::Query)
    .default_value("20".to_string())
    .build();
  assert!(!defaulted.is_mandatory());
}

#[test]
fn test_return_types() {
  assert_eq!(ReturnKind::Void.ts_type(), "void");
  assert_eq!(ReturnKind::Json("UserDto[]".to_string()).ts_type(), "UserDto[]");
  assert_eq!(
    ReturnKind::Pageable("UserDto".to_string()).ts_type(),
    "PageableResponseBody<UserDto>"
  );
  assert_eq!(ReturnKind::Blob.ts_type(), "HttpResponse<Blob>");
}
