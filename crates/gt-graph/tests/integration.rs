//! Integration tests for gt-graph.

use gt_core::{NodeId, Position};
use gt_graph::{Edge, FlagTable, Graph, GraphBuilder, GraphError, validate_graph};
use proptest::prelude::*;

fn id(i: u32) -> NodeId {
    NodeId::from_index(i)
}

fn diamond() -> Graph {
    // 0 - 1, 0 - 2, 1 - 3, 2 - 3
    GraphBuilder::with_nodes(4)
        .edge(0, 1)
        .edge(0, 2)
        .edge(1, 3)
        .edge(2, 3)
        .build()
        .unwrap()
}

#[test]
fn diamond_neighbors() {
    let graph = diamond();
    assert_eq!(graph.neighbors(id(0)), vec![id(1), id(2)]);
    assert_eq!(graph.neighbors(id(3)), vec![id(1), id(2)]);
    assert_eq!(graph.neighbors(id(1)), vec![id(0), id(3)]);
}

#[test]
fn add_edge_scenarios() {
    let mut graph = Graph::new();
    graph.add_node(Position::new(100.0, 100.0));
    graph.add_node(Position::new(200.0, 100.0));

    assert!(!graph.add_edge(id(0), id(0)));
    assert!(graph.add_edge(id(0), id(1)));
    assert!(!graph.add_edge(id(1), id(0)));
    assert_eq!(graph.edges(), &[Edge { from: id(0), to: id(1) }]);
}

#[test]
fn try_add_edge_reports_reason() {
    let mut graph = Graph::new();
    graph.add_node(Position::default());
    graph.add_node(Position::default());

    assert_eq!(
        graph.try_add_edge(id(1), id(1)),
        Err(GraphError::SelfLoop { node: id(1) })
    );
    assert!(graph.try_add_edge(id(1), id(0)).is_ok());
    assert_eq!(
        graph.try_add_edge(id(0), id(1)),
        Err(GraphError::DuplicateEdge {
            from: id(0),
            to: id(1)
        })
    );
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn clear_then_rebuild_reuses_ids() {
    let mut graph = diamond();
    graph.clear();
    assert_eq!(graph.id_counter(), 0);

    let node = graph.add_node(Position::default());
    assert_eq!(node.id, id(0));
    assert!(graph.neighbors(id(0)).is_empty());
    assert!(validate_graph(&graph).is_ok());
}

#[test]
fn flag_table_covers_every_node() {
    let graph = diamond();
    let flags = FlagTable::for_graph(&graph);
    let ids: Vec<NodeId> = flags.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![id(0), id(1), id(2), id(3)]);
    assert_eq!(flags.visited_count(), 0);
}

proptest! {
    #[test]
    fn direction_swap_never_adds_a_second_edge(
        n in 2_u32..8,
        pairs in prop::collection::vec((0_u32..8, 0_u32..8), 0..20),
    ) {
        let mut graph = Graph::new();
        for _ in 0..n {
            graph.add_node(Position::default());
        }

        for (a, b) in pairs {
            let (a, b) = (id(a % n), id(b % n));
            let first = graph.add_edge(a, b);
            let count = graph.edge_count();
            prop_assert!(!graph.add_edge(b, a));
            prop_assert_eq!(graph.edge_count(), count);
            if a == b {
                prop_assert!(!first);
            }
        }

        prop_assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn neighbors_are_symmetric(
        n in 1_u32..8,
        pairs in prop::collection::vec((0_u32..8, 0_u32..8), 0..20),
    ) {
        let mut graph = Graph::new();
        for _ in 0..n {
            graph.add_node(Position::default());
        }
        for (a, b) in pairs {
            graph.add_edge(id(a % n), id(b % n));
        }

        for node in graph.nodes() {
            for other in graph.neighbors(node.id) {
                prop_assert!(graph.neighbors(other).contains(&node.id));
            }
        }
    }
}
