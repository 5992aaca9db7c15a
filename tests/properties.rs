//! Property tests over randomly built graphs.
//!
//! Graphs come from two sources: arbitrary edge lists drawn by proptest (cycles,
//! self-loops and parallel edges included) and the seeded generators of
//! `nodegraph::generate`.

use std::collections::HashSet;

use nodegraph::{generate::random_connected_graph, prelude::*};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Builds a directed graph with `nodes` nodes and the given edges, endpoints taken
/// modulo the node count.
fn build(nodes: usize, edges: &[(usize, usize)]) -> Graph<(), ()> {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..nodes)
        .map(|i| graph.add_node_with_identifier(i as i64, ()))
        .collect();
    for &(source, sink) in edges {
        graph
            .add_edge(ids[source % nodes], ids[sink % nodes])
            .expect("endpoints are live");
    }
    graph
}

fn edge_lists() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|nodes| (Just(nodes), proptest::collection::vec((0..nodes, 0..nodes), 0..48)))
}

proptest! {
    #[test]
    fn test_connectivity_duality((nodes, edges) in edge_lists()) {
        let graph = build(nodes, &edges);
        prop_assert_eq!(number_of_components(&graph) == 1, is_connected(&graph));

        let members: usize = connected_components(&graph).iter().map(Vec::len).sum();
        prop_assert_eq!(members, nodes);
    }

    #[test]
    fn test_topological_order_is_valid((nodes, edges) in edge_lists()) {
        let graph = build(nodes, &edges);
        let cyclic = !find_cycles(&graph, true).is_empty();

        match topological_sort(&graph) {
            Some(order) => {
                prop_assert!(!cyclic);
                prop_assert_eq!(order.len(), nodes);
                let mut position = vec![0; graph.node_bound()];
                for (i, node) in order.iter().enumerate() {
                    position[node.index()] = i;
                }
                for (_, edge) in graph.edges() {
                    prop_assert!(position[edge.source().index()] < position[edge.sink().index()]);
                }
            }
            None => prop_assert!(cyclic),
        }
        prop_assert_eq!(is_acyclic(&graph), !cyclic);
    }

    #[test]
    fn test_cycle_queries_agree_in_both_modes((nodes, edges) in edge_lists()) {
        let mut graph = build(nodes, &edges);
        for directed in [true, false] {
            graph.set_directed(directed);
            let acyclic = is_acyclic(&graph);
            prop_assert_eq!(acyclic, find_cycles(&graph, true).is_empty());
            prop_assert_eq!(acyclic, !graph.node_ids().any(|n| has_cycle(&graph, n)));
            for start in graph.node_ids() {
                if let Some(cycle) = find_cycle(&graph, start) {
                    prop_assert_eq!(cycle.first(), cycle.last());
                }
            }
        }
        prop_assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_scc_partition((nodes, edges) in edge_lists()) {
        let graph = build(nodes, &edges);
        let sccs = strongly_connected_components(&graph);

        let mut seen = HashSet::new();
        for component in &sccs {
            for &node in component {
                prop_assert!(seen.insert(node), "{} appears twice", node);
            }
        }
        prop_assert_eq!(seen.len(), nodes);

        for component in sccs.iter().filter(|c| c.len() > 1) {
            for &from in component {
                let reachable: HashSet<NodeId> = dfs(&graph, from).collect();
                prop_assert!(component.iter().all(|to| reachable.contains(to)));
            }
        }
    }

    #[test]
    fn test_links_round_trip((nodes, edges) in edge_lists()) {
        let graph = build(nodes, &edges);
        let text = to_links_list(&graph).to_string();
        let list: LinksList = text.parse().expect("rendered list parses");
        let copy: Graph<(), ()> = parse(&list);

        // Isolated nodes have no representation in the format
        let mut connected_only = graph.clone();
        let isolated: Vec<NodeId> = connected_only.node_ids().filter(|&n| connected_only.degree(n) == 0).collect();
        for node in isolated {
            connected_only.remove_node(node);
        }
        prop_assert!(has_identical_structure_with(&connected_only, &copy));
    }

    #[test]
    fn test_spanning_tree_size(seed in any::<u64>(), nodes in 1usize..40, extra in 0usize..60) {
        let graph: Graph<(), ()> = random_connected_graph(&mut StdRng::seed_from_u64(seed), nodes, extra, 9);
        let start = graph.node_ids().next().expect("at least one node");

        let by_kruskal = kruskal(&graph, false).expect("kruskal without reroot");
        let by_prim = prim(&graph, start, false).expect("start is a member");
        for tree in [&by_kruskal, &by_prim] {
            prop_assert_eq!(tree.node_count(), nodes);
            prop_assert_eq!(tree.edge_count(), nodes - 1);
            prop_assert!(is_acyclic(tree));
            prop_assert!(is_connected(tree));
        }

        let weight = |g: &Graph<(), ()>| g.edges().map(|(_, e)| e.weight()).sum::<f64>();
        prop_assert_eq!(weight(&by_kruskal), weight(&by_prim));
    }

    #[test]
    fn test_split_then_merge(seed in any::<u64>(), nodes in 1usize..30) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut left: Graph<(), ()> = random_connected_graph(&mut rng, nodes, 5, 3);
        let right: Graph<(), ()> = random_connected_graph(&mut rng, nodes, 5, 3);
        left.shift_identifiers(nodes as i64);

        let merged = merge(&left, &right);
        prop_assert_eq!(merged.node_count(), 2 * nodes);
        prop_assert_eq!(number_of_components(&merged), 2);

        let parts = split(&merged);
        prop_assert!(has_identical_structure_with(&parts[0], &left));
        prop_assert!(has_identical_structure_with(&parts[1], &right));
    }
}
