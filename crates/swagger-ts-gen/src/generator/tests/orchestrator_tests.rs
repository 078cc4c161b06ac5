use std::path::Path;

use serde_json::json;

use super::{document, shop_document};
use crate::generator::{
  codegen::GeneratedFile,
  config::CodegenConfig,
  metrics::GenerationWarning,
  orchestrator::{GeneratedOutput, Orchestrator},
};

fn generate(config: CodegenConfig) -> GeneratedOutput {
  Orchestrator::new(shop_document(), config).generate()
}

fn file<'a>(output: &'a GeneratedOutput, path: &str) -> &'a GeneratedFile {
  output
    .files
    .iter()
    .find(|f| f.path == Path::new(path))
    .unwrap_or_else(|| panic!("missing {path}"))
}

#[test]
fn test_empty_document() {
  let output = Orchestrator::new(document(json!({ "swagger": "2.0" })), CodegenConfig::default()).generate();
  assert!(output.files.is_empty());
  assert_eq!(output.stats.models_generated(), 0);
  assert_eq!(output.stats.services_generated, 0);
  assert!(output.stats.warnings.is_empty());
}

#[test]
fn test_files_in_emission_order() {
  let output = generate(CodegenConfig::default());
  let paths: Vec<String> = output
    .files
    .iter()
    .map(|f| f.path.to_string_lossy().replace('\\', "/"))
    .collect();
  assert_eq!(
    paths,
    vec![
      "models/user-dto.d.ts",
      "models/order-dto.d.ts",
      "models/metadata.d.ts",
      "models/index.d.ts",
      "services/user.service.ts",
      "services/order.service.ts",
    ]
  );
}

#[test]
fn test_statistics() {
  let stats = generate(CodegenConfig::default()).stats;
  assert_eq!(stats.definitions_seen, 4);
  assert_eq!(stats.interfaces_generated, 2);
  assert_eq!(stats.type_aliases_generated, 1);
  assert_eq!(stats.generic_instantiations_skipped, 1);
  assert_eq!(stats.services_generated, 2);
  assert_eq!(stats.methods_generated, 4);
  assert!(stats.warnings.is_empty(), "{:?}", stats.warnings);
}

#[test]
fn test_mutual_references_are_reported_as_cycle() {
  let stats = generate(CodegenConfig::default()).stats;
  assert_eq!(stats.cycles_detected, 1);
  assert_eq!(
    stats.cycle_details,
    vec![vec!["OrderDto".to_string(), "UserDto".to_string()]]
  );
}

#[test]
fn test_model_contents() {
  let output = generate(CodegenConfig::default());

  let user = &file(&output, "models/user-dto.d.ts").contents;
  assert!(user.contains("import { OrderDto } from './order-dto';\n"));
  assert!(user.contains("export interface UserDto {\n  id: number;\n"));
  assert!(user.contains("  /**\n   * Display name\n   */\n  name?: string;\n"));
  assert!(user.contains("  orders?: OrderDto[];\n"));

  let order = &file(&output, "models/order-dto.d.ts").contents;
  assert!(order.contains("import { UserDto } from './user-dto';\n"));
  assert!(order.contains("  attributes: { [k: string]: string };\n"));
  assert!(order.contains("   * Allowed values: 'NEW', 'PAID'\n"));

  let metadata = &file(&output, "models/metadata.d.ts").contents;
  assert!(metadata.ends_with("export type Metadata = any;\n"));

  let index = &file(&output, "models/index.d.ts").contents;
  assert!(index.ends_with(
    "export * from './user-dto';\nexport * from './order-dto';\nexport * from './metadata';\n"
  ));
}

#[test]
fn test_service_imports_and_methods() {
  let output = generate(CodegenConfig::default());
  let service = &file(&output, "services/user.service.ts").contents;

  assert!(service.contains(
    "import { Injectable } from '@angular/core';
import { Observable } from 'rxjs';
import { HttpClient, HttpParams, HttpResponse } from '@angular/common/http';
import { UserDto } from '@private-dto';
import { PageableResponseBody } from '@models/plugins';
"
  ));
  assert!(service.contains("export class UserService {"));
  assert!(service.contains("  private readonly basePath = '/api';"));
  assert!(service.contains("  listUsers(active: boolean, page?: number): Observable<PageableResponseBody<UserDto>> {"));
  assert!(service.contains("  createUser(user: UserDto): Observable<UserDto> {"));
  assert!(service.contains("return this.http.post<UserDto>(`${this.basePath}/users`, user);"));
  assert!(service.contains("  getAvatar(id: number): Observable<HttpResponse<Blob>> {"));

  let orders = &file(&output, "services/order.service.ts").contents;
  assert!(orders.contains("import { OrderDto } from '@private-dto';"));
  assert!(!orders.contains("HttpParams"));
  assert!(orders.contains("return this.http.get<OrderDto[]>(`${this.basePath}/orders`);"));
}

#[test]
fn test_custom_modules() {
  let config = CodegenConfig::builder()
    .dto_module("@app/dto".to_string())
    .plugins_module("@app/paging".to_string())
    .build();
  let output = generate(config);
  let service = &file(&output, "services/user.service.ts").contents;
  assert!(service.contains("import { UserDto } from '@app/dto';"));
  assert!(service.contains("import { PageableResponseBody } from '@app/paging';"));
}

#[test]
fn test_models_only_and_services_only() {
  let models = generate(CodegenConfig::builder().emit_services(false).build());
  assert!(models.files.iter().all(|f| f.path.starts_with("models")));
  assert_eq!(models.stats.services_generated, 0);

  let services = generate(CodegenConfig::builder().emit_models(false).build());
  assert!(services.files.iter().all(|f| f.path.starts_with("services")));
  assert_eq!(services.stats.models_generated(), 0);
  assert_eq!(services.stats.cycles_detected, 0);
}

#[test]
fn test_output_is_deterministic() {
  let first = generate(CodegenConfig::default());
  let second = generate(CodegenConfig::default());
  assert_eq!(first.files, second.files);
}

#[test]
fn test_failed_units_are_skipped_and_recorded() {
  let output = Orchestrator::new(
    document(json!({
      "swagger": "2.0",
      "paths": {
        "/good": {
          "get": {
            "tags": ["mixed"],
            "operationId": "good",
            "responses": { "200": { "description": "OK", "schema": { "$ref": "#/definitions/Good" } } }
          }
        },
        "/bad": {
          "get": {
            "tags": ["mixed"],
            "operationId": "bad",
            "responses": { "200": { "description": "OK", "schema": { "$ref": "Good" } } }
          }
        },
        "/broken": {
          "post": {
            "tags": ["broken"],
            "parameters": [{ "name": "x", "in": "query", "type": "tuple" }],
            "responses": {}
          }
        }
      },
      "definitions": {
        "Good": { "properties": { "id": { "type": "string" } } },
        "Bad": { "properties": { "list": { "type": "array" } } },
        "Weird«Name": { "type": "object" }
      }
    })),
    CodegenConfig::default(),
  )
  .generate();

  let paths: Vec<String> = output
    .files
    .iter()
    .map(|f| f.path.to_string_lossy().replace('\\', "/"))
    .collect();
  assert_eq!(
    paths,
    vec!["models/good.d.ts", "models/index.d.ts", "services/mixed.service.ts"]
  );

  let skipped: Vec<String> = output.stats.skipped_units().map(ToString::to_string).collect();
  assert_eq!(skipped.len(), 4, "{skipped:?}");
  assert!(skipped[0].starts_with("Skipped definition 'Bad' (UnknownTypeError)"));
  assert!(skipped[1].starts_with("Skipped definition 'Weird«Name' (GenericNestingError)"));
  assert!(skipped[2].starts_with("Skipped operation 'MixedService.bad' (GET /bad, RefParseError)"));
  assert!(skipped[3].starts_with("Skipped operation 'BrokenService."));
  assert!(skipped[3].contains("(POST /broken, UnknownTypeError)"));

  assert_eq!(output.stats.services_generated, 1);
  assert_eq!(output.stats.methods_generated, 1);
}

#[test]
fn test_unknown_reference_is_a_warning() {
  let output = Orchestrator::new(
    document(json!({
      "swagger": "2.0",
      "definitions": {
        "Holder": { "properties": { "ghost": { "$ref": "#/definitions/Ghost" } } }
      }
    })),
    CodegenConfig::default(),
  )
  .generate();

  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::UnknownReference {
      owner: "Holder".to_string(),
      name: "Ghost".to_string(),
    }]
  );
  assert!(!output.stats.warnings[0].is_skipped_item());
  assert_eq!(output.stats.models_generated(), 1);
}

#[test]
fn test_duplicate_method_names_are_suffixed() {
  let output = Orchestrator::new(
    document(json!({
      "swagger": "2.0",
      "paths": {
        "/a": { "get": { "tags": ["t"], "operationId": "findUsingGET", "responses": {} } },
        "/b": { "get": { "tags": ["t"], "operationId": "findUsingGET_1", "responses": {} } }
      }
    })),
    CodegenConfig::default(),
  )
  .generate();

  let service = &file(&output, "services/t.service.ts").contents;
  assert!(service.contains("  find(): Observable<void> {"));
  assert!(service.contains("  find2(): Observable<void> {"));
}
