use super::{FileHeader, INDENT, render_docs, render_imports};
use crate::{
  generator::{
    ast::{ArgumentDef, MethodDef, ParamLocation, ReturnKind, ServiceDef},
    converter::type_resolver::{TS_NUMBER, TS_STRING},
  },
  naming::identifiers::escape_single_quoted,
};

/// Renders `services/<stem>.service.ts`.
#[must_use]
pub fn render_service(service: &ServiceDef, header: &FileHeader) -> String {
  let mut out = header.to_string();
  out.push('\n');
  out.push_str(&render_imports(&service.imports));
  out.push('\n');

  out.push_str("@Injectable({ providedIn: 'root' })\n");
  out.push_str(&format!("export class {} {{\n", service.class_name));
  out.push_str(&format!(
    "{INDENT}private readonly basePath = '{}';\n\n",
    escape_single_quoted(service.base_path.trim_end_matches('/'))
  ));
  out.push_str(&format!("{INDENT}constructor(private readonly http: HttpClient) {{}}\n"));

  for method in &service.methods {
    out.push('\n');
    out.push_str(&render_method(method));
  }
  out.push_str("}\n");
  out
}

fn render_method(method: &MethodDef) -> String {
  let body_indent = INDENT.repeat(2);
  let signature = method.arguments.iter().map(render_argument).collect::<Vec<_>>().join(", ");

  let mut out = render_docs(&method.docs, 1);
  out.push_str(&format!(
    "{INDENT}{}({signature}): Observable<{}> {{\n",
    method.name,
    method.returns.ts_type()
  ));

  let mut options = vec![];
  if let Some(lines) = render_collection(method, ParamLocation::Query, "params", "HttpParams") {
    out.push_str(&lines);
    options.push("params".to_string());
  }
  if let Some(lines) = render_collection(method, ParamLocation::Header, "headers", "HttpHeaders") {
    out.push_str(&lines);
    options.push("headers".to_string());
  }

  let url = format!("`${{this.basePath}}{}`", method.url);
  let verb = method.http_method.as_ref();
  let type_arg = match method.returns {
    ReturnKind::Blob => String::new(),
    _ => format!("<{}>", method.returns.ts_type()),
  };

  let call = if method.http_method.takes_body() {
    let body = method.body.as_deref().unwrap_or("undefined");
    push_response_options(&mut options, &method.returns);
    format!("this.http.{verb}{type_arg}({url}, {body}{})", render_options(&options))
  } else if let Some(body) = method.body.as_deref() {
    options.push(format!("body: {body}"));
    push_response_options(&mut options, &method.returns);
    format!(
      "this.http.request{type_arg}('{}', {url}{})",
      verb.to_uppercase(),
      render_options(&options)
    )
  } else {
    push_response_options(&mut options, &method.returns);
    format!("this.http.{verb}{type_arg}({url}{})", render_options(&options))
  };

  out.push_str(&format!("{body_indent}return {call};\n"));
  out.push_str(&format!("{INDENT}}}\n"));
  out
}

fn render_argument(arg: &ArgumentDef) -> String {
  match (&arg.default_value, arg.optional) {
    (Some(default), _) => format!("{}: {} = {default}", arg.name, arg.ts_type),
    (None, true) => format!("{}?: {}", arg.name, arg.ts_type),
    (None, false) => format!("{}: {}", arg.name, arg.ts_type),
  }
}

/// Builds the `HttpParams`/`HttpHeaders` value for one location, skipping unset optionals.
fn render_collection(method: &MethodDef, location: ParamLocation, var: &str, class: &str) -> Option<String> {
  let args: Vec<&ArgumentDef> = method.arguments_in(location).collect();
  if args.is_empty() {
    return None;
  }

  let pad = INDENT.repeat(2);
  let mut out = format!("{pad}let {var} = new {class}();\n");
  for arg in args {
    let set = format!(
      "{var} = {var}.set('{}', {});",
      escape_single_quoted(&arg.original_name),
      wire_value(arg, location)
    );
    if arg.optional && arg.default_value.is_none() {
      out.push_str(&format!("{pad}if ({} !== undefined && {} !== null) {{\n", arg.name, arg.name));
      out.push_str(&format!("{pad}{INDENT}{set}\n"));
      out.push_str(&format!("{pad}}}\n"));
    } else {
      out.push_str(&format!("{pad}{set}\n"));
    }
  }
  Some(out)
}

/// Query values accept strings and numbers as-is; headers only strings.
fn wire_value(arg: &ArgumentDef, location: ParamLocation) -> String {
  let passthrough = match location {
    ParamLocation::Query => arg.ts_type == TS_STRING || arg.ts_type == TS_NUMBER,
    _ => arg.ts_type == TS_STRING,
  };
  if passthrough {
    arg.name.clone()
  } else {
    format!("String({})", arg.name)
  }
}

fn push_response_options(options: &mut Vec<String>, returns: &ReturnKind) {
  if *returns == ReturnKind::Blob {
    options.push("responseType: 'blob'".to_string());
    options.push("observe: 'response'".to_string());
  }
}

fn render_options(options: &[String]) -> String {
  if options.is_empty() {
    String::new()
  } else {
    format!(", {{ {} }}", options.join(", "))
  }
}
