// SPDX-License-Identifier: MIT OR Apache-2.0

//! The BCP-47 similarity matcher and chooser (§4.E, §4.F).

pub mod affinity;
pub mod chooser;
pub mod similarity;

pub use chooser::{choose, ChooseOptions, Filter, Use};
pub use similarity::{similarity, similarity_subtags};
