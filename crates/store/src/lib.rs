// SPDX-License-Identifier: MIT OR Apache-2.0

//! The content-addressed `Collectible`/`Collector` pattern (§9).
//!
//! Domain-specific collectors (for conditions, condition sets, and
//! decisions) live in `ctxres-resource`; this crate only provides the
//! generic machinery they're built from.

pub mod collectible;
pub mod collector;

pub use collectible::Collectible;
pub use collector::{Collector, FrozenCollector, Keyed};
