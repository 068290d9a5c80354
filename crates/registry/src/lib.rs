// SPDX-License-Identifier: MIT OR Apache-2.0

//! The IANA language subtag and extension registries (§4.A).

pub mod document;
pub mod partition;
pub mod record;
pub mod store;
pub mod well_formed;

pub use document::RegistryDocument;
pub use partition::Partition;
pub use record::{RegistryRecord, RegistryType};
pub use store::Registries;

#[cfg(feature = "zip-bundle")]
pub use store::from_zip_bytes;
