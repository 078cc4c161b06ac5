use crate::generator::{ast::TypeName, schema_graph::SchemaGraph};

fn names(list: &[&str]) -> Vec<TypeName> {
  list.iter().map(|name| TypeName::from(*name)).collect()
}

#[test]
fn test_two_node_cycle() {
  let mut graph = SchemaGraph::new();
  graph.add_unit("UserDto".into(), &names(&["OrderDto"]));
  graph.add_unit("OrderDto".into(), &names(&["UserDto"]));
  graph.add_unit("Leaf".into(), &[]);

  assert_eq!(graph.detect_cycles(), vec![vec!["OrderDto".to_string(), "UserDto".to_string()]]);
}

#[test]
fn test_acyclic_graph_has_no_cycles() {
  let mut graph = SchemaGraph::new();
  graph.add_unit("A".into(), &names(&["B"]));
  graph.add_unit("B".into(), &names(&["C"]));
  graph.add_unit("C".into(), &[]);
  assert!(graph.detect_cycles().is_empty());
}

#[test]
fn test_self_loop_is_a_cycle() {
  let mut graph = SchemaGraph::new();
  graph.add_unit("Node".into(), &names(&["Node"]));
  assert_eq!(graph.detect_cycles(), vec![vec!["Node".to_string()]]);
}

#[test]
fn test_cycles_sorted_by_first_member() {
  let mut graph = SchemaGraph::new();
  graph.add_unit("Y".into(), &names(&["Z"]));
  graph.add_unit("Z".into(), &names(&["Y"]));
  graph.add_unit("B".into(), &names(&["A"]));
  graph.add_unit("A".into(), &names(&["B"]));

  let cycles = graph.detect_cycles();
  assert_eq!(cycles.len(), 2);
  assert_eq!(cycles[0], vec!["A".to_string(), "B".to_string()]);
  assert_eq!(cycles[1], vec!["Y".to_string(), "Z".to_string()]);
}
