pub mod ast;
pub mod codegen;
pub mod config;
pub mod converter;
pub mod errors;
pub mod generics;
pub mod metrics;
pub(crate) mod operation_converter;
pub mod orchestrator;
pub mod schema;
pub(crate) mod schema_converter;
pub(crate) mod schema_graph;

#[cfg(test)]
mod tests;
