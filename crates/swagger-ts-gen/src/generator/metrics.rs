use strum::Display;

use super::errors::ResolveError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationStats {
  pub definitions_seen: usize,
  pub interfaces_generated: usize,
  pub type_aliases_generated: usize,
  pub generic_instantiations_skipped: usize,
  pub services_generated: usize,
  pub methods_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, is_interface: bool) {
    if is_interface {
      self.interfaces_generated += 1;
    } else {
      self.type_aliases_generated += 1;
    }
  }

  pub fn record_generic_instantiation(&mut self) {
    self.generic_instantiations_skipped += 1;
  }

  pub fn record_service(&mut self, methods: usize) {
    self.services_generated += 1;
    self.methods_generated += methods;
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    self.cycles_detected += cycles.len();
    self.cycle_details.extend(cycles);
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  #[must_use]
  pub fn models_generated(&self) -> usize {
    self.interfaces_generated + self.type_aliases_generated
  }

  pub fn skipped_units(&self) -> impl Iterator<Item = &GenerationWarning> {
    self.warnings.iter().filter(|warning| warning.is_skipped_item())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped definition '{name}' ({kind}): {error}")]
  DefinitionSkipped {
    name: String,
    kind: &'static str,
    error: String,
  },
  #[strum(to_string = "Skipped operation '{name}' ({method} {path}, {kind}): {error}")]
  OperationSkipped {
    name: String,
    method: String,
    path: String,
    kind: &'static str,
    error: String,
  },
  #[strum(to_string = "'{owner}' references '{name}', which has no definition")]
  UnknownReference { owner: String, name: String },
}

impl GenerationWarning {
  pub(crate) fn definition_skipped(name: &str, error: &ResolveError) -> Self {
    Self::DefinitionSkipped {
      name: name.to_string(),
      kind: error.kind(),
      error: error.to_string(),
    }
  }

  pub(crate) fn operation_skipped(name: &str, method: &str, path: &str, error: &ResolveError) -> Self {
    Self::OperationSkipped {
      name: name.to_string(),
      method: method.to_uppercase(),
      path: path.to_string(),
      kind: error.kind(),
      error: error.to_string(),
    }
  }

  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::DefinitionSkipped { .. } | Self::OperationSkipped { .. })
  }
}
