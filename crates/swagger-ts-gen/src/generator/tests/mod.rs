mod graph_tests;
mod orchestrator_tests;

use serde_json::{Value, json};

use super::{ast::ImportSet, schema::SwaggerDocument};

pub(super) fn document(value: Value) -> SwaggerDocument {
  serde_json::from_value(value).unwrap()
}

pub(super) fn imported(imports: &ImportSet, module: &str, name: &str) -> bool {
  imports
    .iter()
    .any(|(from, names)| from == module && names.contains(name))
}

/// A small Springfox-style document exercising every emitter path.
pub(super) fn shop_document() -> SwaggerDocument {
  document(json!({
    "swagger": "2.0",
    "info": { "title": "Shop", "version": "1.0" },
    "basePath": "/api",
    "paths": {
      "/users": {
        "get": {
          "tags": ["user-controller"],
          "operationId": "listUsersUsingGET",
          "parameters": [
            { "name": "page", "in": "query", "type": "integer", "required": false },
            { "name": "active", "in": "query", "type": "boolean", "required": true }
          ],
          "responses": { "200": { "description": "OK", "schema": { "$ref": "#/definitions/Page«UserDto»" } } }
        },
        "post": {
          "tags": ["user-controller"],
          "operationId": "createUserUsingPOST",
          "parameters": [
            { "name": "user", "in": "body", "required": true, "schema": { "$ref": "#/definitions/UserDto" } }
          ],
          "responses": { "201": { "description": "Created", "schema": { "$ref": "#/definitions/UserDto" } } }
        }
      },
      "/users/{id}/avatar": {
        "get": {
          "tags": ["user-controller"],
          "operationId": "getAvatarUsingGET",
          "parameters": [{ "name": "id", "in": "path", "required": true, "type": "integer" }],
          "responses": { "200": { "description": "OK", "schema": { "type": "string", "format": "byte" } } }
        }
      },
      "/orders": {
        "get": {
          "tags": ["order-controller"],
          "operationId": "listOrdersUsingGET",
          "responses": {
            "200": { "description": "OK", "schema": { "type": "array", "items": { "$ref": "#/definitions/OrderDto" } } }
          }
        }
      }
    },
    "definitions": {
      "UserDto": {
        "type": "object",
        "required": ["id"],
        "properties": {
          "id": { "type": "integer", "format": "int64" },
          "name": { "type": "string", "description": "Display name" },
          "orders": { "type": "array", "items": { "$ref": "#/definitions/OrderDto" } }
        }
      },
      "OrderDto": {
        "type": "object",
        "properties": {
          "status": { "type": "string", "enum": ["NEW", "PAID"] },
          "buyer": { "$ref": "#/definitions/UserDto" },
          "attributes": { "type": "object", "additionalProperties": { "type": "string" } }
        }
      },
      "Page«UserDto»": {
        "type": "object",
        "properties": { "content": { "type": "array", "items": { "$ref": "#/definitions/UserDto" } } }
      },
      "Metadata": { "type": "object" }
    }
  }))
}
