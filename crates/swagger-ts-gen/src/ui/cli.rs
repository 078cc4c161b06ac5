use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "swagger-ts-gen")]
#[command(author, version, about = "Swagger 2.0 to TypeScript model and Angular service generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript models and Angular services
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Swagger 2.0 JSON document, as a file path or an http(s) URL
  #[arg(short, long, value_name = "FILE|URL")]
  pub input: String,

  /// Directory receiving `models/` and `services/`
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Module services import DTO interfaces from
  #[arg(long, value_name = "MODULE", default_value = "@private-dto")]
  pub dto_module: String,

  /// Module providing PageableResponseBody and PageableRequestBody
  #[arg(long, value_name = "MODULE", default_value = "@models/plugins")]
  pub plugins_module: String,

  /// Generic wrapper names treated as paged collections (comma-separated)
  #[arg(long, value_name = "NAMES", value_delimiter = ',', default_values = ["Page", "PaginationResponse"])]
  pub pageable_wrapper: Vec<String>,

  /// Only write model declarations
  #[arg(long, default_value_t = false, conflicts_with = "services_only")]
  pub models_only: bool,

  /// Only write Angular services
  #[arg(long, default_value_t = false)]
  pub services_only: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every operation with the service method it becomes
  Operations {
    /// Swagger 2.0 JSON document, as a file path or an http(s) URL
    #[arg(short, long, value_name = "FILE|URL")]
    input: String,
  },
}
