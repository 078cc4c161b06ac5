use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  naming::identifiers::{method_name, service_names},
  ui::{Colors, colors::to_comfy, term_width},
  utils::spec::{SpecLoader, SpecSource},
};

/// One row of `list operations`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  service: String,
  method_name: String,
  http_method: String,
  path: String,
}

fn collect_rows(document: &crate::generator::schema::SwaggerDocument) -> Vec<OperationRow> {
  let mut rows: Vec<OperationRow> = document
    .operations()
    .into_iter()
    .map(|entry| OperationRow {
      service: service_names(entry.service_tag()).1,
      method_name: method_name(entry.operation.operation_id.as_deref(), entry.method, entry.path),
      http_method: entry.method.to_string().to_uppercase(),
      path: entry.path.to_string(),
    })
    .collect();

  rows.sort_by(|a, b| (&a.service, &a.method_name).cmp(&(&b.service, &b.method_name)));
  rows
}

pub async fn list_operations(input: &str, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(SpecSource::parse(input)).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["SERVICE", "METHOD NAME", "HTTP", "PATH"] {
    header.add_cell(Cell::new(title).fg(to_comfy(colors.label())));
  }
  table.set_header(header);

  for row in collect_rows(&document) {
    let mut cells = Row::new();
    cells.add_cell(Cell::new(row.service).fg(to_comfy(colors.primary())));
    cells.add_cell(
      Cell::new(row.method_name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    cells.add_cell(
      Cell::new(row.http_method)
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    cells.add_cell(Cell::new(row.path).fg(to_comfy(colors.primary())));
    table.add_row(cells);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::generator::schema::SwaggerDocument;

  #[test]
  fn rows_are_sorted_by_service_then_method() {
    let document: SwaggerDocument = serde_json::from_value(json!({
      "swagger": "2.0",
      "paths": {
        "/users": {
          "post": { "tags": ["user-controller"], "operationId": "createUserUsingPOST", "responses": {} },
          "get": { "tags": ["user-controller"], "operationId": "listUsersUsingGET", "responses": {} }
        },
        "/orders/{id}": {
          "delete": { "tags": ["order"], "responses": {} }
        }
      }
    }))
    .unwrap();

    let rows = collect_rows(&document);
    let summary: Vec<(&str, &str, &str)> = rows
      .iter()
      .map(|row| (row.service.as_str(), row.method_name.as_str(), row.http_method.as_str()))
      .collect();

    assert_eq!(
      summary,
      vec![
        ("OrderService", "deleteOrdersById", "DELETE"),
        ("UserService", "createUser", "POST"),
        ("UserService", "listUsers", "GET"),
      ]
    );
  }
}
