//! Exhaustive reachability export.
//!
//! Walks every configuration reachable from the machine's initial
//! configuration and returns the full transition graph with fingerprinted
//! nodes and event-labelled edges, for visualization and coverage tooling.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Fingerprint, Machine};

/// One reachable configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode<C> {
    /// Identity key of the configuration.
    pub fingerprint: Fingerprint,
    /// The configuration itself.
    pub config: C,
}

/// One transition edge between reachable configurations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge<E> {
    /// Fingerprint of the source configuration.
    pub source: Fingerprint,
    /// The event triggering the transition.
    pub event: E,
    /// Fingerprint of the resulting configuration.
    pub target: Fingerprint,
}

/// The materialized transition graph of a machine.
///
/// Nodes appear in breadth-first discovery order; edges appear in source
/// discovery order, then candidate-event order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectedGraph<C, E> {
    /// Every reachable configuration.
    pub nodes: Vec<GraphNode<C>>,
    /// Every transition between them.
    pub edges: Vec<GraphEdge<E>>,
}

/// Materialize the full reachable transition graph of `machine`.
///
/// Unlike the plan search, this walk has no target and no cutoff: it only
/// terminates on machines with a finite reachable configuration space.
///
/// # Example
///
/// ```rust
/// use statepath::chart::ChartBuilder;
/// use statepath::graph::directed_graph;
/// use statepath::transitions;
///
/// let chart = ChartBuilder::new()
///     .initial("a")
///     .context(())
///     .transitions(transitions! {
///         "a" on "NEXT" => "b",
///         "b" on "NEXT" => "a",
///     })
///     .build()
///     .unwrap();
///
/// let graph = directed_graph(&chart);
/// assert_eq!(graph.nodes.len(), 2);
/// assert_eq!(graph.edges.len(), 2);
/// ```
pub fn directed_graph<M: Machine>(machine: &M) -> DirectedGraph<M::Config, M::Event> {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let config = machine.initial_config();
    let fingerprint = machine.fingerprint(&config);
    visited.insert(fingerprint.clone());
    queue.push_back((config, fingerprint));

    while let Some((config, fingerprint)) = queue.pop_front() {
        for event in machine.candidate_events(&config) {
            let target = machine.apply(&config, &event);
            let target_fingerprint = machine.fingerprint(&target);
            edges.push(GraphEdge {
                source: fingerprint.clone(),
                event,
                target: target_fingerprint.clone(),
            });
            if visited.insert(target_fingerprint.clone()) {
                queue.push_back((target, target_fingerprint));
            }
        }
        nodes.push(GraphNode {
            fingerprint,
            config,
        });
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "materialized graph");
    DirectedGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartBuilder, Transition};

    fn diamond_chart() -> crate::chart::Chart<()> {
        // a branches to b and c; both rejoin at d.
        ChartBuilder::new()
            .initial("a")
            .context(())
            .transitions(vec![
                Transition::new("a", "LEFT", "b"),
                Transition::new("a", "RIGHT", "c"),
                Transition::new("b", "JOIN", "d"),
                Transition::new("c", "JOIN", "d"),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn graph_covers_all_reachable_configurations() {
        let graph = directed_graph(&diamond_chart());

        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.edges.len(), 4);

        let names: Vec<&str> = graph
            .nodes
            .iter()
            .map(|node| node.config.state.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn edges_link_fingerprints_of_their_endpoints() {
        let chart = diamond_chart();
        let graph = directed_graph(&chart);

        for edge in &graph.edges {
            assert!(graph.nodes.iter().any(|n| n.fingerprint == edge.source));
            assert!(graph.nodes.iter().any(|n| n.fingerprint == edge.target));
        }
    }

    #[test]
    fn graph_roundtrip_serialization() {
        let graph = directed_graph(&diamond_chart());
        let json = serde_json::to_string(&graph).unwrap();
        let back: DirectedGraph<crate::chart::ChartConfig<()>, String> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(graph, back);
    }
}
