use std::collections::BTreeMap;

use indexmap::IndexMap;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use super::ast::TypeName;

/// Import edges between generated models, used to report reference cycles.
///
/// Cycles are informational only: references are never expanded, so they do
/// not affect resolution.
#[derive(Debug, Clone, Default)]
pub(crate) struct SchemaGraph {
  dependencies: IndexMap<TypeName, Vec<TypeName>>,
}

impl SchemaGraph {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn add_unit(&mut self, name: TypeName, imports: &[TypeName]) {
    self.dependencies.insert(name, imports.to_vec());
  }

  /// Strongly connected components with more than one member, plus self loops.
  /// Members are sorted within a cycle and cycles are sorted by first member.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        graph.add_edge(node.as_str(), dep.as_str(), ());
      }
    }

    let mut cycles: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for scc in kosaraju_scc(&graph) {
      if scc.len() > 1 || graph.contains_edge(scc[0], scc[0]) {
        let mut members: Vec<String> = scc.into_iter().map(String::from).collect();
        members.sort();
        cycles.insert(members[0].clone(), members);
      }
    }
    cycles.into_values().collect()
  }
}
