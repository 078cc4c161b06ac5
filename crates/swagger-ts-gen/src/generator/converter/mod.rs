mod dependencies;
pub(crate) mod type_resolver;

pub use dependencies::DependencyCollector;
pub use type_resolver::{ResolvedType, TypeResolver};

#[cfg(test)]
mod tests;
