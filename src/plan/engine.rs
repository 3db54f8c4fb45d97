//! Breadth-first plan search.
//!
//! The engine discovers the transition graph by simulating the machine one
//! event at a time; nothing is materialized up front. Expansion proceeds
//! frontier by frontier so that distance is well-defined, a fingerprint is
//! considered visited as soon as it is first enqueued, and every search
//! invocation owns its visited state (concurrent searches are independent).

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::core::{Fingerprint, Machine};
use crate::plan::path::{Path, Plan};

/// One configuration on the current frontier, carrying every minimal-length
/// path that reached its fingerprint.
struct FrontierNode<C, E> {
    config: C,
    fingerprint: Fingerprint,
    paths: Vec<Path<C, E>>,
}

/// Find all shortest plans from the machine's initial configuration to a
/// configuration satisfying `matches_target`.
///
/// Matched configurations are terminal: the engine records them and never
/// expands them further, so a matched state with a context-mutating self-loop
/// cannot send the search into an infinite frontier. An empty result means the
/// target is unreachable; that is not an error.
///
/// # Example
///
/// ```rust
/// use statepath::chart::ChartBuilder;
/// use statepath::plan::shortest_plans_to;
/// use statepath::transitions;
///
/// let chart = ChartBuilder::new()
///     .initial("a")
///     .context(())
///     .transitions(transitions! {
///         "a" on "NEXT" => "b",
///         "b" on "NEXT" => "c",
///     })
///     .build()
///     .unwrap();
///
/// let plans = shortest_plans_to(&chart, |config| config.matches("c"));
/// assert_eq!(plans.len(), 1);
/// assert_eq!(plans[0].paths[0].len(), 2);
/// ```
pub fn shortest_plans_to<M, F>(machine: &M, matches_target: F) -> Vec<Plan<M::Config, M::Event>>
where
    M: Machine,
    F: Fn(&M::Config) -> bool,
{
    let config = machine.initial_config();
    let fingerprint = machine.fingerprint(&config);
    let seed = FrontierNode {
        paths: vec![Path::new(config.clone())],
        config,
        fingerprint,
    };
    search(machine, vec![seed], &matches_target)
}

/// Find all shortest plans from any reachable configuration satisfying
/// `matches_start` to a configuration satisfying `matches_target`.
///
/// The start frontier is seeded with every configuration reachable from the
/// machine's initial configuration that satisfies `matches_start`, each as a
/// zero-length path beginning at that configuration; events spent reaching a
/// seed are not part of the plan. Distances are compared globally across all
/// seeds, and one visited set spans the whole multi-source search. A
/// configuration matching both predicates yields a trivial zero-length plan.
pub fn shortest_plans_from_to<M, FS, FT>(
    machine: &M,
    matches_start: FS,
    matches_target: FT,
) -> Vec<Plan<M::Config, M::Event>>
where
    M: Machine,
    FS: Fn(&M::Config) -> bool,
    FT: Fn(&M::Config) -> bool,
{
    let seeds = start_configs(machine, &matches_start)
        .into_iter()
        .map(|(config, fingerprint)| FrontierNode {
            paths: vec![Path::new(config.clone())],
            config,
            fingerprint,
        })
        .collect();
    search(machine, seeds, &matches_target)
}

/// Unrestricted reachability walk collecting every configuration that
/// satisfies `matches_start`, deduplicated by fingerprint, in discovery order.
fn start_configs<M, F>(machine: &M, matches_start: &F) -> Vec<(M::Config, Fingerprint)>
where
    M: Machine,
    F: Fn(&M::Config) -> bool,
{
    let mut found = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let config = machine.initial_config();
    let fingerprint = machine.fingerprint(&config);
    visited.insert(fingerprint.clone());
    queue.push_back((config, fingerprint));

    while let Some((config, fingerprint)) = queue.pop_front() {
        if matches_start(&config) {
            found.push((config.clone(), fingerprint));
        }
        for event in machine.candidate_events(&config) {
            let next = machine.apply(&config, &event);
            let next_fingerprint = machine.fingerprint(&next);
            if visited.insert(next_fingerprint.clone()) {
                queue.push_back((next, next_fingerprint));
            }
        }
    }

    debug!(seeds = found.len(), "collected start configurations");
    found
}

/// Frontier-by-frontier BFS from `frontier` (distance 0) until any
/// configuration matches, the frontier exhausts, or — on an infinite
/// configuration space with a never-matching target — forever.
fn search<M, F>(
    machine: &M,
    mut frontier: Vec<FrontierNode<M::Config, M::Event>>,
    matches_target: &F,
) -> Vec<Plan<M::Config, M::Event>>
where
    M: Machine,
    F: Fn(&M::Config) -> bool,
{
    // Fingerprint -> distance at which it was first enqueued. Grows
    // monotonically; scoped to this one search.
    let mut visited: HashMap<Fingerprint, usize> = frontier
        .iter()
        .map(|node| (node.fingerprint.clone(), 0))
        .collect();
    let mut depth = 0usize;

    while !frontier.is_empty() {
        trace!(depth, frontier = frontier.len(), "scanning frontier");

        // Matched configurations are terminal hits: collect them and stop.
        // Every plan returned sits at the globally minimal match distance,
        // and no matched configuration is ever expanded.
        let plans: Vec<Plan<M::Config, M::Event>> = frontier
            .iter()
            .filter(|node| matches_target(&node.config))
            .map(|node| Plan {
                config: node.config.clone(),
                paths: node.paths.clone(),
            })
            .collect();
        if !plans.is_empty() {
            debug!(depth, plans = plans.len(), "target matched");
            return plans;
        }

        let mut next: Vec<FrontierNode<M::Config, M::Event>> = Vec::new();
        let mut slot: HashMap<Fingerprint, usize> = HashMap::new();

        for node in &frontier {
            for event in machine.candidate_events(&node.config) {
                let config = machine.apply(&node.config, &event);
                let fingerprint = machine.fingerprint(&config);
                match visited.get(&fingerprint).copied() {
                    // First reached at a shorter (or this frontier's own)
                    // distance; its path set is already fixed.
                    Some(seen) if seen <= depth => continue,
                    // Reached earlier in this same expansion: another
                    // equally-short route to the same fingerprint. Merge,
                    // keeping discovery order.
                    Some(_) => {
                        let idx = slot[&fingerprint];
                        next[idx].paths.extend(
                            node.paths
                                .iter()
                                .map(|path| path.extended(event.clone(), config.clone())),
                        );
                    }
                    None => {
                        visited.insert(fingerprint.clone(), depth + 1);
                        slot.insert(fingerprint.clone(), next.len());
                        let paths = node
                            .paths
                            .iter()
                            .map(|path| path.extended(event.clone(), config.clone()))
                            .collect();
                        next.push(FrontierNode {
                            config,
                            fingerprint,
                            paths,
                        });
                    }
                }
            }
        }

        frontier = next;
        depth += 1;
    }

    debug!(depth, "frontier exhausted without a match");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Table-driven machine over static state names, no context.
    struct TableMachine {
        initial: &'static str,
        edges: Vec<(&'static str, &'static str, &'static str)>,
    }

    impl Machine for TableMachine {
        type Config = &'static str;
        type Event = &'static str;

        fn initial_config(&self) -> &'static str {
            self.initial
        }

        fn candidate_events(&self, config: &&'static str) -> Vec<&'static str> {
            let mut events = Vec::new();
            for (from, event, _) in &self.edges {
                if from == config && !events.contains(event) {
                    events.push(*event);
                }
            }
            events
        }

        fn apply(&self, config: &&'static str, event: &&'static str) -> &'static str {
            self.edges
                .iter()
                .find(|(from, on, _)| from == config && on == event)
                .map(|(_, _, to)| *to)
                .unwrap_or(*config)
        }

        fn fingerprint(&self, config: &&'static str) -> Fingerprint {
            Fingerprint::new(*config)
        }
    }

    /// a -> b -> c -> d chain where d self-loops on NEXT, bumping a counter.
    struct LoopMachine;

    impl Machine for LoopMachine {
        type Config = (&'static str, u32);
        type Event = &'static str;

        fn initial_config(&self) -> (&'static str, u32) {
            ("a", 0)
        }

        fn candidate_events(&self, _config: &(&'static str, u32)) -> Vec<&'static str> {
            vec!["NEXT"]
        }

        fn apply(&self, config: &(&'static str, u32), _event: &&'static str) -> (&'static str, u32) {
            match config.0 {
                "a" => ("b", config.1),
                "b" => ("c", config.1),
                "c" => ("d", config.1),
                _ => ("d", config.1 + 1),
            }
        }

        fn fingerprint(&self, config: &(&'static str, u32)) -> Fingerprint {
            Fingerprint::new(format!("{}|{}", config.0, config.1))
        }
    }

    #[test]
    fn finds_single_shortest_plan() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "NEXT", "b"), ("b", "NEXT", "c"), ("c", "NEXT", "d")],
        };

        let plans = shortest_plans_to(&machine, |config| *config == "c");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].config, "c");
        assert_eq!(plans[0].paths.len(), 1);
        let events: Vec<_> = plans[0].paths[0].events().copied().collect();
        assert_eq!(events, vec!["NEXT", "NEXT"]);
    }

    #[test]
    fn matched_configuration_is_not_expanded() {
        // Without the post-match cutoff, d's counting self-loop would grow
        // the frontier forever.
        let plans = shortest_plans_to(&LoopMachine, |config| config.0 == "d");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 1);
        assert_eq!(plans[0].paths[0].len(), 3);
        assert_eq!(plans[0].paths[0].end(), &("d", 0));
    }

    #[test]
    fn unreachable_target_returns_empty() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "NEXT", "b"), ("b", "NEXT", "c")],
        };

        let plans = shortest_plans_to(&machine, |config| *config == "zz");
        assert!(plans.is_empty());
    }

    #[test]
    fn merges_equally_short_paths_to_same_fingerprint() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![
                ("a", "LEFT", "m"),
                ("a", "RIGHT", "m"),
                ("m", "NEXT", "t"),
            ],
        };

        let plans = shortest_plans_to(&machine, |config| *config == "t");

        assert_eq!(plans.len(), 1);
        let events: Vec<Vec<&str>> = plans[0]
            .paths
            .iter()
            .map(|path| path.events().copied().collect())
            .collect();
        assert_eq!(events, vec![vec!["LEFT", "NEXT"], vec!["RIGHT", "NEXT"]]);
    }

    #[test]
    fn distinct_matches_become_distinct_plans() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "TO_B", "b"), ("a", "TO_C", "c")],
        };

        let plans = shortest_plans_to(&machine, |config| *config == "b" || *config == "c");

        assert_eq!(plans.len(), 2);
        // Discovery order follows candidate-event order.
        assert_eq!(plans[0].config, "b");
        assert_eq!(plans[1].config, "c");
    }

    #[test]
    fn pure_noop_self_transition_is_not_revisited() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "NOOP", "a"), ("a", "NEXT", "b")],
        };

        let plans = shortest_plans_to(&machine, |config| *config == "b");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 1);
        let events: Vec<_> = plans[0].paths[0].events().copied().collect();
        assert_eq!(events, vec!["NEXT"]);
    }

    #[test]
    fn from_to_paths_begin_at_start_match() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![
                ("a", "TO_Y", "y"),
                ("a", "TO_B", "b"),
                ("b", "NEXT_B_TO_X", "x"),
                ("x", "NEXT_X_TO_Y", "y"),
            ],
        };

        let plans = shortest_plans_from_to(&machine, |c| *c == "b", |c| *c == "y");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 1);
        assert_eq!(plans[0].paths[0].start, "b");
        let events: Vec<_> = plans[0].paths[0].events().copied().collect();
        assert_eq!(events, vec!["NEXT_B_TO_X", "NEXT_X_TO_Y"]);
    }

    #[test]
    fn from_to_trivial_plan_has_zero_length_path() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "TO_B", "b")],
        };

        let plans = shortest_plans_from_to(&machine, |c| *c == "b", |c| *c == "b");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 1);
        assert!(plans[0].paths[0].is_empty());
        assert_eq!(plans[0].paths[0].start, "b");
    }

    #[test]
    fn from_to_compares_distances_globally() {
        // Both n and f match the start predicate; only n is one step from
        // the target, so no plan may come from f.
        let machine = TableMachine {
            initial: "a",
            edges: vec![
                ("a", "GO_NEAR", "n"),
                ("a", "GO_FAR", "f"),
                ("n", "WIN", "t"),
                ("f", "STEP", "m"),
                ("m", "WIN", "t"),
            ],
        };

        let plans =
            shortest_plans_from_to(&machine, |c| *c == "n" || *c == "f", |c| *c == "t");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 1);
        assert_eq!(plans[0].paths[0].start, "n");
        assert_eq!(plans[0].paths[0].len(), 1);
    }

    #[test]
    fn from_to_merges_sources_reaching_same_fingerprint() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![
                ("a", "GO_ONE", "s1"),
                ("a", "GO_TWO", "s2"),
                ("s1", "FINISH", "t"),
                ("s2", "FINISH", "t"),
            ],
        };

        let plans =
            shortest_plans_from_to(&machine, |c| *c == "s1" || *c == "s2", |c| *c == "t");

        // One plan (one matched fingerprint) holding a path from each seed.
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].paths.len(), 2);
        let starts: Vec<_> = plans[0].paths.iter().map(|p| p.start).collect();
        assert_eq!(starts, vec!["s1", "s2"]);
    }

    #[test]
    fn from_to_with_no_start_match_returns_empty() {
        let machine = TableMachine {
            initial: "a",
            edges: vec![("a", "NEXT", "b")],
        };

        let plans = shortest_plans_from_to(&machine, |c| *c == "zz", |c| *c == "b");
        assert!(plans.is_empty());
    }
}
