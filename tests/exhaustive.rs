use eulerian::{
    eulerian::{classify, construct, construct_trail, Error, Trail},
    graph::{EdgeListGraph, Graph, NeighborMode},
    types::VId,
};
use itertools::Itertools;
use std::collections::HashSet;

/// Every end vertex of a trail from `at` that uses all unused edges.
fn brute_force_ends(graph: &EdgeListGraph, at: VId, used: &mut Vec<bool>, ends: &mut HashSet<VId>) {
    if used.iter().all(|&u| u) {
        ends.insert(at);
        return;
    }
    let mode = if graph.is_directed() {
        NeighborMode::Out
    } else {
        NeighborMode::All
    };
    for &eid in graph.incident_edges(at, mode).iter().dedup() {
        if !used[eid] {
            used[eid] = true;
            brute_force_ends(graph, graph.other_endpoint(eid, at), used, ends);
            used[eid] = false;
        }
    }
}

fn brute_force(graph: &EdgeListGraph) -> (bool, bool) {
    if graph.num_edges() == 0 {
        return (true, true);
    }
    let (mut has_path, mut has_cycle) = (false, false);
    for start in 0..graph.num_vertices() {
        let mut ends = HashSet::new();
        brute_force_ends(graph, start, &mut vec![false; graph.num_edges()], &mut ends);
        has_path |= !ends.is_empty();
        has_cycle |= ends.contains(&start);
    }
    (has_path, has_cycle)
}

fn assert_trail(graph: &EdgeListGraph, trail: &Trail, start: VId) {
    assert_eq!(
        trail.edges().iter().copied().sorted().collect::<Vec<_>>(),
        (0..graph.num_edges()).collect::<Vec<_>>(),
        "{:?}",
        graph
    );
    assert_eq!(trail.vertices()[0], start);
    for (i, &eid) in trail.edges().iter().enumerate() {
        let (u, v) = (trail.vertices()[i], trail.vertices()[i + 1]);
        let (from, to) = graph.endpoints(eid);
        assert!(
            (from, to) == (u, v) || (!graph.is_directed() && (from, to) == (v, u)),
            "{:?}",
            graph
        );
    }
}

fn check_graph(graph: &EdgeListGraph) {
    let status = classify(graph);
    assert_eq!(
        (status.has_path(), status.has_cycle()),
        brute_force(graph),
        "{:?}",
        graph
    );
    if !status.has_path() {
        assert_eq!(status.start(), None);
        for start in 0..graph.num_vertices() {
            assert!(matches!(
                construct(graph, start),
                Err(Error::NotEulerian(_))
            ));
        }
    } else if status.has_cycle() {
        for start in 0..graph.num_vertices() {
            if graph.degree(start, NeighborMode::All) > 0 {
                let trail = construct_trail(graph, start).unwrap();
                assert_trail(graph, &trail, start);
                assert!(trail.is_closed());
            }
        }
    } else {
        let start = status.start().unwrap();
        let trail = construct_trail(graph, start).unwrap();
        assert_trail(graph, &trail, start);
        assert!(!trail.is_closed());
        for other in 0..graph.num_vertices() {
            let valid = if graph.is_directed() {
                other == start
            } else {
                graph.degree(other, NeighborMode::All) % 2 == 1
            };
            if !valid {
                assert_eq!(construct(graph, other), Err(Error::InvalidStart(other)));
            }
        }
    }
}

fn check_all(num_vertices: usize, directed: bool, max_edges: usize) {
    let pairs: Vec<(VId, VId)> = if directed {
        (0..num_vertices)
            .cartesian_product(0..num_vertices)
            .collect()
    } else {
        (0..num_vertices)
            .tuple_combinations()
            .chain((0..num_vertices).map(|v| (v, v)))
            .collect()
    };
    for num_edges in 0..=max_edges {
        for edges in pairs.iter().copied().combinations_with_replacement(num_edges) {
            let graph = EdgeListGraph::with_edges(num_vertices, directed, edges).unwrap();
            check_graph(&graph);
        }
    }
}

#[test]
fn test_undirected_small_multigraphs() {
    check_all(3, false, 5);
    check_all(4, false, 4);
}

#[test]
fn test_directed_small_multigraphs() {
    check_all(3, true, 4);
    check_all(4, true, 3);
}
