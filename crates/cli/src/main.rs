// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ctxres-resolve`: a small front end exercising every library crate
//! end to end (§6 "Ambient CLI surface").

mod config;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ctxres_core::{NormalizationLevel, ValidityLevel};
use ctxres_match::{choose, similarity, ChooseOptions, Filter, Use};
use ctxres_registry::Registries;
use ctxres_resource::{Catalog, Context as ResourceContext, Outcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctxres-resolve", about = "Context-qualified resource resolution toolkit")]
struct Cli {
    /// Optional TOML config overriding registry/catalog defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValidityArg {
    Valid,
    Strict,
}

#[derive(Clone, Copy, ValueEnum)]
enum NormalizationArg {
    Canonical,
    Preferred,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a BCP-47 tag at the given level.
    ValidateTag {
        tag: String,
        #[arg(long, value_enum, default_value_t = ValidityArg::Valid)]
        level: ValidityArg,
    },
    /// Normalize a BCP-47 tag at the given level.
    NormalizeTag {
        tag: String,
        #[arg(long, value_enum, default_value_t = NormalizationArg::Preferred)]
        level: NormalizationArg,
    },
    /// Score similarity between two tags.
    Similarity { a: String, b: String },
    /// Rank available tags against a desired list.
    Choose {
        #[arg(long, value_delimiter = ',')]
        desired: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        available: Vec<String>,
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Walk a resource tree and write catalog JSON.
    Import {
        dir: PathBuf,
        #[arg(long, default_value = "catalog.json")]
        out: PathBuf,
    },
    /// Resolve a resource id from previously-imported catalog JSON.
    Resolve {
        catalog: PathBuf,
        resource_id: String,
        /// Pipe-separated `qualifier=value` pairs, e.g. `territory=US|language=en-US`.
        #[arg(long)]
        context: String,
    },
}

impl From<ValidityArg> for ValidityLevel {
    fn from(v: ValidityArg) -> Self {
        match v {
            ValidityArg::Valid => ValidityLevel::Valid,
            ValidityArg::Strict => ValidityLevel::StrictlyValid,
        }
    }
}

impl From<NormalizationArg> for NormalizationLevel {
    fn from(v: NormalizationArg) -> Self {
        match v {
            NormalizationArg::Canonical => NormalizationLevel::Canonical,
            NormalizationArg::Preferred => NormalizationLevel::Preferred,
        }
    }
}

impl std::fmt::Display for ValidityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValidityArg::Valid => "valid",
            ValidityArg::Strict => "strict",
        })
    }
}

impl std::fmt::Display for NormalizationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NormalizationArg::Canonical => "canonical",
            NormalizationArg::Preferred => "preferred",
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => config::Settings::load(path)?,
        None => config::Settings::default(),
    };
    let registries = Registries::bundled();

    match cli.command {
        Command::ValidateTag { tag, level } => {
            let level: ValidityLevel = level.into();
            ctxres_parse::parse_tag(registries, &tag, level, NormalizationLevel::Canonical)
                .with_context(|| format!("{tag:?} failed validation"))?;
            println!("{tag} is valid at {level:?}");
        }
        Command::NormalizeTag { tag, level } => {
            let level: NormalizationLevel = level.into();
            let parsed = ctxres_parse::parse_tag(registries, &tag, ValidityLevel::WellFormed, level)?;
            println!("{}", parsed.as_str());
        }
        Command::Similarity { a, b } => {
            let tier = similarity(registries, &a, &b)?;
            println!("{tier} ({:.2})", tier.score());
        }
        Command::Choose { desired, available, fallback } => {
            let options = ChooseOptions { filter: Filter::Best, ultimate_fallback: fallback, use_: Use::AvailableLanguage };
            let ranked = choose(registries, &desired, &available, &options)?;
            for tag in ranked {
                println!("{tag}");
            }
        }
        Command::Import { dir, out } => {
            let qualifiers = settings.qualifiers()?;
            let report = ctxres_import::import_tree(registries, &qualifiers, &dir)?;
            ctxres_import::write_manifest(&out, &report.manifest)?;
            println!(
                "imported {} resources ({} files skipped) -> {}",
                report.manifest.len(),
                report.skipped.len(),
                out.display()
            );
        }
        Command::Resolve { catalog, resource_id, context } => {
            let qualifiers = settings.qualifiers()?;
            let manifest = ctxres_import::read_manifest(&catalog)?;
            let built: Catalog = ctxres_import::build_catalog(qualifiers, &manifest)?;
            let context = ResourceContext::parse(&context)?;
            match built.resolve(registries, &resource_id, &context)? {
                Outcome::Ranked(ranked) => {
                    for r in ranked {
                        println!("score={:.2} value={:?}", r.score, r.entry.value);
                    }
                }
                Outcome::DefaultOnly(entry) => println!("default: {:?}", entry.value),
                Outcome::NoMatch => println!("no match"),
            }
        }
    }

    Ok(())
}
