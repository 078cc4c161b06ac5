
use crate::generator::{ast::TypeName, converter::DependencyCollector};

fn recorded(collector: &DependencyCollector) -> Vec<&str> {
  collector.iter().map(TypeName::as_str).collect()
}
