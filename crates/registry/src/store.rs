// SPDX-License-Identifier: MIT OR Apache-2.0

//! The top-level `Registries` value (§9 "Re-architect as an explicit
//! `Registries` value passed to constructors that need it").

use crate::document::RegistryDocument;
use crate::partition::Partition;
use crate::record::RegistryType;
use crate::well_formed;
use ctxres_core::Result;
use std::sync::OnceLock;

/// Bundled minimal IANA data, embedded at compile time. This is not a
/// complete mirror of the live registries (downloading and refreshing
/// those is explicitly out of scope, §1) — it's a curated slice large
/// enough to exercise every documented behavior: the grandfathered
/// `i-klingon` -> `tlh` substitution, a handful of languages, scripts,
/// regions, and variants, and one multi-value extlang prefix case.
const BUNDLED_SUBTAG_REGISTRY: &str = include_str!("../data/language-subtag-registry.json");
const BUNDLED_EXTENSIONS_REGISTRY: &str = include_str!("../data/language-tag-extensions-registry.json");

/// An immutable, in-memory index over the IANA language subtag registry
/// and the language tag extensions registry (§4.A).
pub struct Registries {
    language: Partition,
    extlang: Partition,
    script: Partition,
    region: Partition,
    variant: Partition,
    grandfathered: Partition,
    redundant: Partition,
    extension: Partition,
}

impl Registries {
    /// Build from the two parsed JSON documents (§6).
    pub fn from_documents(subtags: RegistryDocument, extensions: RegistryDocument) -> Self {
        let mut language = Partition::new(RegistryType::Language, well_formed::language());
        let mut extlang = Partition::new(RegistryType::Extlang, well_formed::extlang());
        let mut script = Partition::new(RegistryType::Script, well_formed::script());
        let mut region = Partition::new(RegistryType::Region, well_formed::region());
        let mut variant = Partition::new(RegistryType::Variant, well_formed::variant());
        let mut grandfathered =
            Partition::new(RegistryType::Grandfathered, well_formed::whole_tag());
        let mut redundant = Partition::new(RegistryType::Redundant, well_formed::whole_tag());

        for record in subtags.entries {
            match record.record_type {
                RegistryType::Language => language.insert(record),
                RegistryType::Extlang => extlang.insert(record),
                RegistryType::Script => script.insert(record),
                RegistryType::Region => region.insert(record),
                RegistryType::Variant => variant.insert(record),
                RegistryType::Grandfathered => grandfathered.insert(record),
                RegistryType::Redundant => redundant.insert(record),
                RegistryType::Extension => {}
            }
        }

        let mut extension =
            Partition::new(RegistryType::Extension, well_formed::extension_singleton());
        for record in extensions.entries {
            extension.insert(record);
        }

        Self { language, extlang, script, region, variant, grandfathered, redundant, extension }
    }

    /// Parse both documents from JSON strings (§6).
    pub fn from_json_str(subtags_json: &str, extensions_json: &str) -> Result<Self> {
        let subtags = RegistryDocument::from_json_str(subtags_json)?;
        let extensions = RegistryDocument::from_json_str(extensions_json)?;
        Ok(Self::from_documents(subtags, extensions))
    }

    /// The bundled registry, loaded once per process (§9's
    /// `Registries::default()` lazy-loader).
    pub fn bundled() -> &'static Self {
        static CELL: OnceLock<Registries> = OnceLock::new();
        CELL.get_or_init(|| {
            Self::from_json_str(BUNDLED_SUBTAG_REGISTRY, BUNDLED_EXTENSIONS_REGISTRY)
                .expect("bundled registry JSON is well-formed")
        })
    }

    pub fn language(&self) -> &Partition {
        &self.language
    }
    pub fn extlang(&self) -> &Partition {
        &self.extlang
    }
    pub fn script(&self) -> &Partition {
        &self.script
    }
    pub fn region(&self) -> &Partition {
        &self.region
    }
    pub fn variant(&self) -> &Partition {
        &self.variant
    }
    pub fn grandfathered(&self) -> &Partition {
        &self.grandfathered
    }
    pub fn redundant(&self) -> &Partition {
        &self.redundant
    }
    pub fn extension(&self) -> &Partition {
        &self.extension
    }
}

#[cfg(feature = "zip-bundle")]
pub fn from_zip_bytes(bytes: &[u8]) -> Result<Registries> {
    use ctxres_core::CtxError;
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| CtxError::Io(format!("invalid registry zip: {e}")))?;

    let mut read_entry = |name_hint: &str| -> Result<String> {
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| CtxError::Io(format!("zip read error: {e}")))?;
            if file.name().to_ascii_lowercase().contains(name_hint) {
                let mut buf = String::new();
                file.read_to_string(&mut buf)?;
                return Ok(buf);
            }
        }
        Err(CtxError::NotFound(format!("no entry matching {name_hint:?} in registry zip")))
    };

    let subtags_json = read_entry("subtag")?;
    let extensions_json = read_entry("extension")?;
    Registries::from_json_str(&subtags_json, &extensions_json)
}
