use std::collections::HashSet;

use crate::{
  generator::schema::HttpMethod,
  naming::identifiers::{
    ensure_unique, escape_single_quoted, method_name, sanitize, service_names, to_file_stem, to_ts_identifier,
    ts_property_key, url_template,
  },
};

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("user-controller"), "user_controller");
  assert_eq!(sanitize("  Ünïcode Tag!! "), "Unicode_Tag");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_file_stems() {
  assert_eq!(to_file_stem("UserDto"), "user-dto");
  assert_eq!(to_file_stem("OrderLineItemDto"), "order-line-item-dto");
  assert_eq!(to_file_stem("!!!"), "unnamed");
}

#[test]
fn test_ts_identifiers() {
  assert_eq!(to_ts_identifier("page_size"), "pageSize");
  assert_eq!(to_ts_identifier("x-request-id"), "xRequestId");
  assert_eq!(to_ts_identifier("default"), "default_");
  assert_eq!(to_ts_identifier("params"), "params_");
  assert_eq!(to_ts_identifier("2fa"), "_2fa");
  assert_eq!(to_ts_identifier("---"), "_");
}

#[test]
fn test_property_keys() {
  assert_eq!(ts_property_key("firstName"), "firstName");
  assert_eq!(ts_property_key("$type"), "$type");
  assert_eq!(ts_property_key("first-name"), "'first-name'");
  assert_eq!(ts_property_key("it's"), "'it\\'s'");
}

#[test]
fn test_escape_single_quoted() {
  assert_eq!(escape_single_quoted(r"a\b'c"), r"a\\b\'c");
}

#[test]
fn test_service_names() {
  assert_eq!(
    service_names("user-controller"),
    ("user".to_string(), "UserService".to_string())
  );
  assert_eq!(
    service_names("order-line-resource"),
    ("order-line".to_string(), "OrderLineService".to_string())
  );
  assert_eq!(
    service_names("controller"),
    ("controller".to_string(), "ControllerService".to_string())
  );
  assert_eq!(service_names(""), ("default".to_string(), "DefaultService".to_string()));
}

#[test]
fn test_method_name_strips_springfox_suffix() {
  assert_eq!(method_name(Some("getUserUsingGET"), HttpMethod::Get, "/users/{id}"), "getUser");
  assert_eq!(
    method_name(Some("createOrderUsingPOST_1"), HttpMethod::Post, "/orders"),
    "createOrder"
  );
}

#[test]
fn test_method_name_camelizes_plain_ids() {
  assert_eq!(method_name(Some("list_users"), HttpMethod::Get, "/users"), "listUsers");
  assert_eq!(method_name(Some("delete"), HttpMethod::Delete, "/users"), "delete_");
}

#[test]
fn test_method_name_falls_back_to_method_and_path() {
  assert_eq!(method_name(None, HttpMethod::Get, "/users/{userId}/orders"), "getUsersByUserIdOrders");
  assert_eq!(method_name(Some("  "), HttpMethod::Post, "/"), "post");
}

#[test]
fn test_url_template() {
  assert_eq!(url_template("/users/{user_id}/orders"), "/users/${userId}/orders");
  assert_eq!(url_template("/plain"), "/plain");
}

#[test]
fn test_ensure_unique() {
  let mut used = HashSet::new();
  assert_eq!(ensure_unique("getUser", &mut used), "getUser");
  assert_eq!(ensure_unique("getUser", &mut used), "getUser2");
  assert_eq!(ensure_unique("getUser", &mut used), "getUser3");
  assert_eq!(ensure_unique("other", &mut used), "other");
}
