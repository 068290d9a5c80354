// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resource decision model and matching engine (§2 modules G-J):
//! qualifiers and qualifier types, conditions and condition sets,
//! abstract and concrete decisions, and the context-scoring engine that
//! ties them to a [`Catalog`].

pub mod candidate;
pub mod catalog;
pub mod condition;
pub mod condition_set;
pub mod context;
pub mod decision;
pub mod engine;
pub mod qualifier;
pub mod qualifier_type;
pub mod token;

pub use candidate::{Candidate, MergeMethod};
pub use catalog::{Catalog, CatalogSummary};
pub use condition::Condition;
pub use condition_set::ConditionSet;
pub use context::Context;
pub use decision::{AbstractDecision, CandidateEntry, ConcreteDecision};
pub use engine::{evaluate, merge, Outcome, Ranked};
pub use qualifier::{is_valid_name, Qualifier};
pub use qualifier_type::{LiteralHierarchy, QualifierType};
