// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared data model for the `ctxres` workspace.
//!
//! This crate has no knowledge of the IANA registries, the parser, or the
//! matching engine; it only defines the types those crates pass to each
//! other: [`JsonValue`], [`error::CtxError`], the BCP-47 [`Subtags`]/
//! [`LanguageTag`] types, and the [`similarity::SimilarityTier`] total
//! order.

pub mod casing;
pub mod error;
pub mod json;
pub mod similarity;
pub mod subtags;
pub mod territory;

pub use error::{CtxError, Result};
pub use json::JsonValue;
pub use similarity::SimilarityTier;
pub use subtags::{
    choose_level, ExtensionSubtag, LanguageTag, NormalizationLevel, PrimaryForm, Subtags,
    ValidityLevel,
};
