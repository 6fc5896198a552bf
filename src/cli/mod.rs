use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::namer::NameLimit;

pub mod batch;
pub mod compose;
pub mod digest;
pub mod limit;

#[derive(Debug, Parser)]
#[command(name = "namer")]
#[command(about = "Deterministic length-bounded name generation")]
#[command(
    long_about = "Derives stable identifiers from a base name and suffix, shortening them with an 8-character FNV-1a digest when they exceed the destination's length limit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Join a base and suffix within a length limit")]
    Compose(compose::ComposeArgs),
    #[command(about = "Shorten a single name to a maximum length")]
    Limit(limit::LimitArgs),
    #[command(about = "Print the 8-character digest of a string")]
    Digest(digest::DigestArgs),
    #[command(about = "Compose many names from a JSON request on stdin")]
    Batch(batch::BatchArgs),
}

/// Named length limits selectable from the command line and batch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LimitPreset {
    Subdomain,
    Label,
}

impl From<LimitPreset> for NameLimit {
    fn from(preset: LimitPreset) -> Self {
        match preset {
            LimitPreset::Subdomain => NameLimit::Subdomain,
            LimitPreset::Label => NameLimit::Label,
        }
    }
}

pub(crate) fn resolve_limit(max_length: Option<usize>, preset: Option<LimitPreset>) -> NameLimit {
    match (max_length, preset) {
        (Some(max_length), _) => NameLimit::Custom(max_length),
        (None, Some(preset)) => preset.into(),
        (None, None) => NameLimit::default(),
    }
}

#[derive(Debug, Serialize)]
pub struct NameResponse {
    pub name: String,
    pub truncated: bool,
    pub length: usize,
    pub max_length: usize,
}

pub enum CommandOutput<T> {
    Text(String),
    Json(T),
}
