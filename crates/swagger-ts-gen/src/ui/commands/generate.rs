use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::GeneratedFile,
    config::CodegenConfig,
    generics::WrapperSet,
    metrics::GenerationStats,
    orchestrator::Orchestrator,
    schema::SwaggerDocument,
  },
  ui::{Colors, GenerateCommand},
  utils::spec::{SpecLoader, SpecSource},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub source: SpecSource,
  pub output: PathBuf,
  pub codegen: CodegenConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      dto_module,
      plugins_module,
      pageable_wrapper,
      models_only,
      services_only,
      verbose,
      quiet,
    } = command;

    let wrappers: Vec<String> = pageable_wrapper
      .into_iter()
      .map(|name| name.trim().to_string())
      .filter(|name| !name.is_empty())
      .collect();
    if wrappers.is_empty() {
      anyhow::bail!("At least one pageable wrapper name is required (--pageable-wrapper)");
    }

    let codegen = CodegenConfig::builder()
      .wrappers(WrapperSet::new(wrappers))
      .dto_module(dto_module)
      .plugins_module(plugins_module)
      .emit_models(!services_only)
      .emit_services(!models_only)
      .build();

    Ok(Self {
      source: SpecSource::parse(&input),
      output,
      codegen,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<SwaggerDocument> {
    SpecLoader::open(self.source.clone()).await?.parse()
  }

  async fn write_file(&self, file: &GeneratedFile) -> anyhow::Result<PathBuf> {
    let path = self.output.join(&file.path);
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&path, &file.contents)
      .await
      .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger document from: {}", self.config.source)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    let message = match (self.config.codegen.emit_models, self.config.codegen.emit_services) {
      (true, false) => "Generating TypeScript models...",
      (false, true) => "Generating Angular services...",
      _ => "Generating TypeScript models and Angular services...",
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn log_file(&self, path: &Path) {
    if self.config.verbose {
      self.info(&format!("Wrote {}", path.display()));
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.codegen.emit_models {
      self.stat("Models generated:", stats.models_generated().to_string());
      self.stat("", format!("{} interfaces", stats.interfaces_generated));
      self.stat("", format!("{} type aliases", stats.type_aliases_generated));
      if stats.generic_instantiations_skipped > 0 {
        self.stat(
          "",
          format!("{} generic instantiations folded", stats.generic_instantiations_skipped),
        );
      }
    }
    if self.config.codegen.emit_services {
      self.stat("Services generated:", stats.services_generated.to_string());
      self.stat("Methods generated:", stats.methods_generated.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose && !self.config.quiet {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.timestamp())
        );
      }
    }
  }

  /// Skipped units are errors of the input and are printed even when quiet.
  fn print_warnings(&self, stats: &GenerationStats) {
    for warning in stats.skipped_units() {
      eprintln!(
        "{} {}",
        "Skipped:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }

    if !self.config.verbose || self.config.quiet {
      return;
    }
    for warning in stats.warnings.iter().filter(|warning| !warning.is_skipped_item()) {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, count: usize) {
    self.info(
      &format!("Writing {count} files to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript sources".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let output = Orchestrator::new(document, config.codegen.clone()).generate();
  logger.print_statistics(&output.stats);

  logger.log_writing(output.files.len());
  for file in &output.files {
    let path = config.write_file(file).await?;
    logger.log_file(&path);
  }

  logger.log_success();
  Ok(())
}
