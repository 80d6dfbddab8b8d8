//! Kahn-style linearization of the class graph

use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info};
use vocab_core::VocabularyGraph;

/// Total order over every class in a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Linearization {
    /// Every class exactly once; ordered classes first, then unresolved ones
    pub order: Vec<String>,

    /// Classes that never became eligible, in lexicographic order
    ///
    /// These sit on a subclass cycle or descend from one. They form the tail
    /// of `order`.
    pub unresolved: Vec<String>,
}

impl Linearization {
    /// Position of a class in the order
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Position lookup table for every class
    #[must_use]
    pub fn positions(&self) -> BTreeMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect()
    }
}

/// Order classes so that no class precedes a resolvable parent
///
/// Only parents declared in the graph count as edges. The initial queue is in
/// lexicographic order; classes that become eligible later join the back of
/// the queue in discovery order. Anything left over is appended in
/// lexicographic order, so the result always contains every class once.
#[must_use]
pub fn linearize(graph: &VocabularyGraph) -> Linearization {
    let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
    let mut children: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (name, class) in &graph.classes {
        let degree = in_degree.entry(name.as_str()).or_insert(0);
        for parent in &class.parents {
            if graph.classes.contains_key(parent) {
                *degree += 1;
                children.entry(parent.as_str()).or_default().push(name.as_str());
            }
        }
    }

    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(name, _)| *name)
        .collect();

    let mut order = Vec::with_capacity(graph.classes.len());
    while let Some(name) = queue.pop_front() {
        order.push(name.to_string());
        for child in children.get(name).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(child) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(*child);
                }
            }
        }
    }

    let unresolved: Vec<String> = in_degree
        .into_iter()
        .filter(|(_, degree)| *degree > 0)
        .map(|(name, _)| name.to_string())
        .collect();

    for name in &unresolved {
        debug!(class = %name, "Class is on or below a subclass cycle");
    }
    if !unresolved.is_empty() {
        info!(
            count = unresolved.len(),
            "Appending classes with unresolvable ancestry"
        );
    }

    order.extend(unresolved.iter().cloned());
    Linearization { order, unresolved }
}
