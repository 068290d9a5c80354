// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `literalHierarchy` qualifier type (§4.G, §9 Open Question: decay
//! factor resolved to `0.5` per ancestor hop, recorded in `DESIGN.md`).
//!
//! A hierarchy is "closed" when `values` is non-empty (every token must be
//! declared, and every `parentOf` reference must resolve within it) or
//! "open" when `values` is empty (any non-empty token is accepted; tokens
//! the hierarchy has no ancestry information for simply don't match).

use ctxres_core::{CtxError, Result};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralHierarchy {
    values: HashSet<String>,
    parent_of: HashMap<String, String>,
}

impl LiteralHierarchy {
    /// A hierarchy over `values` with parent links `parent_of`. An empty
    /// `values` set is *open* (§8: "Literal hierarchy with `values=∅` and
    /// non-empty `hierarchy`: open-mode; unknown tokens return `NoMatch`
    /// without error") and skips the membership check below; a non-empty
    /// `values` set is *closed* and every `parent_of` reference must
    /// resolve within it ([`CtxError::NotFound`] otherwise). Either way
    /// the links must be acyclic ([`CtxError::CircularReference`]).
    pub fn new(values: HashSet<String>, parent_of: HashMap<String, String>) -> Result<Self> {
        if !values.is_empty() {
            for (child, parent) in &parent_of {
                if !values.contains(child) {
                    return Err(CtxError::NotFound(child.clone()));
                }
                if !values.contains(parent) {
                    return Err(CtxError::NotFound(parent.clone()));
                }
            }
        }
        check_acyclic(&parent_of)?;
        Ok(Self { values, parent_of })
    }

    /// The fully open hierarchy: no declared token set, no ancestry.
    pub fn open() -> Self {
        Self { values: HashSet::new(), parent_of: HashMap::new() }
    }

    fn is_closed(&self) -> bool {
        !self.values.is_empty()
    }

    fn is_known_token(&self, token: &str) -> bool {
        !self.is_closed() || self.values.contains(token)
    }

    pub fn is_valid_condition_value(&self, value: &str) -> bool {
        let value = value.trim();
        !value.is_empty() && !value.contains(',') && self.is_known_token(value)
    }

    pub fn is_valid_context_value(&self, value: &str) -> bool {
        let items = super::split_context_list(value);
        !items.is_empty() && items.iter().all(|item| self.is_valid_condition_value(item))
    }

    /// Walks the ancestor chain from `token` looking for `target`,
    /// returning the number of hops if found.
    fn depth_to(&self, token: &str, target: &str) -> Option<usize> {
        let mut current = token.to_string();
        let mut depth = 0usize;
        // `parent_of` is acyclic by construction; bound the walk anyway.
        for _ in 0..=self.parent_of.len() {
            if current.eq_ignore_ascii_case(target) {
                return Some(depth);
            }
            current = self.parent_of.get(&current).cloned()?;
            depth += 1;
        }
        None
    }

    pub fn score(&self, condition_value: &str, context_value: &str) -> f64 {
        super::split_context_list(context_value)
            .iter()
            .filter_map(|token| self.depth_to(token, condition_value))
            .map(|depth| 0.5_f64.powi(depth as i32))
            .fold(0.0_f64, f64::max)
    }

    pub fn is_ancestor(&self, ancestor: &str, token: &str) -> bool {
        self.depth_to(token, ancestor).is_some()
    }
}

fn check_acyclic(parent_of: &HashMap<String, String>) -> Result<()> {
    let mut graph = DiGraph::<&str, ()>::new();
    let mut index_of = HashMap::new();
    for (child, parent) in parent_of {
        let ci = *index_of.entry(child.as_str()).or_insert_with(|| graph.add_node(child.as_str()));
        let pi = *index_of.entry(parent.as_str()).or_insert_with(|| graph.add_node(parent.as_str()));
        graph.add_edge(ci, pi, ());
    }
    if is_cyclic_directed(&graph) {
        return Err(CtxError::CircularReference(format!("{parent_of:?}")));
    }
    Ok(())
}
