use std::{
  collections::HashSet,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

use crate::generator::schema::HttpMethod;

/// Words TypeScript will not accept as a parameter name.
pub(crate) static RESERVED_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "new", "null",
    "return", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "let",
    "static", "yield", "await", "implements", "interface", "package", "private", "protected", "public",
    // Reserved by the generated method bodies.
    "url", "params", "headers",
  ]
  .into_iter()
  .collect()
});

/// Trailing tag segments that name the controller rather than the resource.
const CONTROLLER_SUFFIXES: &[&str] = &["controller", "resource", "endpoint", "api"];
const SERVICE_SUFFIX: &str = "Service";
const DEFAULT_SERVICE_STEM: &str = "default";

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static PLAIN_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static SPRINGFOX_OPERATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+)Using.+$").unwrap());
static PATH_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Transliterates to ASCII, turns every run of other characters into a single
/// underscore and trims underscores from both ends.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// File stem for a definition: `UserDto` becomes `user-dto`.
pub(crate) fn to_file_stem(name: &str) -> String {
  let stem = sanitize(name).to_kebab_case();
  if stem.is_empty() { "unnamed".to_string() } else { stem }
}

/// A camelCase TypeScript identifier for a parameter.
///
/// Reserved words gain a trailing underscore, a leading digit gains a leading one.
pub(crate) fn to_ts_identifier(name: &str) -> String {
  let ident = sanitize(name).to_camel_case();

  if ident.is_empty() {
    return "_".to_string();
  }
  if RESERVED_IDENTIFIERS.contains(ident.as_str()) {
    return format!("{ident}_");
  }
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    return format!("_{ident}");
  }
  ident
}

/// Interface member key, quoted when it is not a plain identifier.
pub(crate) fn ts_property_key(name: &str) -> String {
  if PLAIN_IDENTIFIER_RE.is_match(name) {
    name.to_string()
  } else {
    format!("'{}'", escape_single_quoted(name))
  }
}

pub(crate) fn escape_single_quoted(value: &str) -> String {
  value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Names of the service generated for a tag: `(file stem, class name)`.
///
/// `user-controller` yields `("user", "UserService")`.
pub(crate) fn service_names(tag: &str) -> (String, String) {
  let kebab = sanitize(tag).to_kebab_case();
  let mut segments: Vec<&str> = kebab.split('-').filter(|s| !s.is_empty()).collect();
  if segments.len() > 1
    && let Some(last) = segments.last()
    && CONTROLLER_SUFFIXES.contains(last)
  {
    segments.pop();
  }

  let stem = if segments.is_empty() {
    DEFAULT_SERVICE_STEM.to_string()
  } else {
    segments.join("-")
  };
  let class_name = format!("{}{SERVICE_SUFFIX}", stem.to_pascal_case());
  (stem, class_name)
}

/// Method name for an operation.
///
/// Springfox ids such as `getUserUsingGET_1` lose their `Using…` suffix; other ids
/// are camelCased. Without an id the name is built from the method and path.
pub(crate) fn method_name(operation_id: Option<&str>, method: HttpMethod, path: &str) -> String {
  if let Some(id) = operation_id.map(str::trim).filter(|id| !id.is_empty()) {
    if let Some(captures) = SPRINGFOX_OPERATION_RE.captures(id) {
      return to_ts_identifier(&captures[1]);
    }
    return to_ts_identifier(id);
  }

  let words: Vec<String> = path
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
      Some(param) => format!("by {param}"),
      None => segment.to_string(),
    })
    .collect();

  to_ts_identifier(&format!("{method} {}", words.join(" ")))
}

/// Rewrites `{param}` placeholders into `${param}` template substitutions.
pub(crate) fn url_template(path: &str) -> String {
  let escaped = path.replace('`', "\\`");
  PATH_PARAM_RE
    .replace_all(&escaped, |captures: &regex::Captures<'_>| {
      format!("${{{}}}", to_ts_identifier(&captures[1]))
    })
    .into_owned()
}

/// Returns `base`, or `base2`, `base3`, … if already taken, and records the result.
pub(crate) fn ensure_unique(base: &str, used: &mut HashSet<String>) -> String {
  let mut candidate = base.to_string();
  let mut counter = 2;
  while used.contains(&candidate) {
    candidate = format!("{base}{counter}");
    counter += 1;
  }
  used.insert(candidate.clone());
  candidate
}
