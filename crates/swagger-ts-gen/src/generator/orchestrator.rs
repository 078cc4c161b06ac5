//! Orchestration for the Swagger 2.0 to TypeScript generation pipeline.
//!
//! The orchestrator owns the parsed document and the run configuration and
//! turns them into a list of files plus statistics. It never touches the
//! filesystem and never prints; `ui::commands::generate` decides what to do
//! with the output.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::{
  ast::{ANGULAR_CORE_MODULE, ANGULAR_HTTP_MODULE, ImportSet, MethodDef, RXJS_MODULE, ServiceDef, TypeName},
  codegen::{FileHeader, GeneratedFile, render_index, render_model, render_service},
  config::CodegenConfig,
  converter::{DependencyCollector, TypeResolver},
  metrics::{GenerationStats, GenerationWarning},
  operation_converter::OperationConverter,
  schema::{DefinitionTable, OperationEntry, SwaggerDocument},
  schema_converter::SchemaConverter,
  schema_graph::SchemaGraph,
};
use crate::naming::identifiers::{ensure_unique, method_name, service_names};

/// Everything one run produces.
#[derive(Debug, Clone, Default)]
pub struct GeneratedOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

/// High-level entry point of the generator.
pub struct Orchestrator {
  document: SwaggerDocument,
  config: CodegenConfig,
}

struct ServiceGroup<'a> {
  class_name: String,
  entries: Vec<OperationEntry<'a>>,
}

impl Orchestrator {
  #[must_use]
  pub fn new(document: SwaggerDocument, config: CodegenConfig) -> Self {
    Self { document, config }
  }

  /// Runs the whole pipeline.
  ///
  /// A definition or operation that fails to resolve is skipped and recorded
  /// as a warning; it never aborts the run.
  #[must_use]
  pub fn generate(&self) -> GeneratedOutput {
    let table = DefinitionTable::from_document(&self.document);
    let resolver = TypeResolver::new(self.config.wrappers.clone());
    let header = FileHeader::from_document(&self.document);
    let mut output = GeneratedOutput::default();

    if self.config.emit_models {
      self.generate_models(&table, &resolver, &header, &mut output);
    }
    if self.config.emit_services {
      self.generate_services(&table, &resolver, &header, &mut output);
    }

    output
  }

  fn generate_models(
    &self,
    table: &DefinitionTable,
    resolver: &TypeResolver,
    header: &FileHeader,
    output: &mut GeneratedOutput,
  ) {
    let converter = SchemaConverter::new(resolver);
    let mut graph = SchemaGraph::new();
    let mut stems = vec![];

    for definition in table.iter() {
      output.stats.definitions_seen += 1;
      match converter.convert(definition) {
        Ok(Some(model)) => {
          record_unknown_references(table, model.name(), model.imports.iter(), &mut output.stats);
          graph.add_unit(model.name().clone(), &model.imports);
          output.stats.record_model(model.is_interface());

          let contents = render_model(&model, header, &self.config.plugins_module);
          output.files.push(GeneratedFile::model(&model.file_stem, contents));
          stems.push(model.file_stem);
        }
        Ok(None) => output.stats.record_generic_instantiation(),
        Err(error) => {
          let warning = GenerationWarning::definition_skipped(&definition.name, &error);
          output.stats.record_warning(warning);
        }
      }
    }

    if !stems.is_empty() {
      let contents = render_index(stems.iter().map(String::as_str), header);
      output.files.push(GeneratedFile::model("index", contents));
    }
    output.stats.record_cycles(graph.detect_cycles());
  }

  fn generate_services(
    &self,
    table: &DefinitionTable,
    resolver: &TypeResolver,
    header: &FileHeader,
    output: &mut GeneratedOutput,
  ) {
    let converter = OperationConverter::new(resolver, &self.config);
    let base_path = self.document.base_path.clone().unwrap_or_default();

    for (stem, group) in self.group_operations() {
      let mut used_names = HashSet::new();
      let mut methods: Vec<MethodDef> = vec![];
      let mut dependencies = DependencyCollector::new();
      let mut method_imports = ImportSet::new();

      for entry in &group.entries {
        let base = method_name(entry.operation.operation_id.as_deref(), entry.method, entry.path);
        let name = ensure_unique(&base, &mut used_names);

        let owner = format!("{}.{name}", group.class_name);
        match converter.convert(entry, &name) {
          Ok(converted) => {
            record_unknown_references(table, &owner, converted.dependencies.iter(), &mut output.stats);
            dependencies.merge(&converted.dependencies, &group.class_name);
            method_imports.merge(&converted.imports);
            methods.push(converted.method);
          }
          Err(error) => {
            let warning = GenerationWarning::operation_skipped(&owner, entry.method.as_ref(), entry.path, &error);
            output.stats.record_warning(warning);
          }
        }
      }

      if methods.is_empty() {
        continue;
      }

      let mut imports = ImportSet::new();
      imports.add(ANGULAR_CORE_MODULE, "Injectable");
      imports.add(RXJS_MODULE, "Observable");
      imports.add(ANGULAR_HTTP_MODULE, "HttpClient");
      imports.extend(&self.config.dto_module, dependencies.iter().map(TypeName::to_string));
      imports.merge(&method_imports);

      output.stats.record_service(methods.len());
      let service = ServiceDef::builder()
        .class_name(group.class_name)
        .file_stem(stem.clone())
        .base_path(base_path.clone())
        .methods(methods)
        .imports(imports)
        .build();
      output.files.push(GeneratedFile::service(&stem, render_service(&service, header)));
    }
  }

  /// Operations grouped by service file stem, in first-seen order.
  fn group_operations(&self) -> IndexMap<String, ServiceGroup<'_>> {
    let mut groups: IndexMap<String, ServiceGroup<'_>> = IndexMap::new();
    for entry in self.document.operations() {
      let (stem, class_name) = service_names(entry.service_tag());
      groups
        .entry(stem)
        .or_insert_with(|| ServiceGroup {
          class_name,
          entries: vec![],
        })
        .entries
        .push(entry);
    }
    groups
  }
}

fn record_unknown_references<'a>(
  table: &DefinitionTable,
  owner: &str,
  names: impl Iterator<Item = &'a TypeName>,
  stats: &mut GenerationStats,
) {
  for name in names {
    if !table.contains(name) {
      stats.record_warning(GenerationWarning::UnknownReference {
        owner: owner.to_string(),
        name: name.to_string(),
      });
    }
  }
}
