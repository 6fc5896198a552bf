use clap::Args;

use crate::cli::{CommandOutput, LimitPreset, NameResponse, resolve_limit};
use crate::error::NamerError;
use crate::namer::compose_name;

#[derive(Debug, Args)]
pub struct ComposeArgs {
    #[arg(value_name = "BASE", help = "Human-readable name stem")]
    pub base: String,
    #[arg(
        value_name = "SUFFIX",
        default_value = "",
        help = "Qualifier appended after a dash"
    )]
    pub suffix: String,
    #[arg(
        long,
        value_name = "N",
        conflicts_with = "limit",
        help = "Maximum length in bytes"
    )]
    pub max_length: Option<usize>,
    #[arg(
        long,
        value_enum,
        value_name = "PRESET",
        help = "Named limit (subdomain=253, label=63); defaults to subdomain"
    )]
    pub limit: Option<LimitPreset>,
    #[arg(long, help = "Emit structured JSON output")]
    pub json: bool,
}

pub fn run_compose(args: ComposeArgs) -> Result<CommandOutput<NameResponse>, NamerError> {
    let max_length = resolve_limit(args.max_length, args.limit).max_length();
    let name = compose_name(&args.base, &args.suffix, max_length)?;

    if !args.json {
        return Ok(CommandOutput::Text(name));
    }

    let untruncated_length = args.base.len() + 1 + args.suffix.len();
    Ok(CommandOutput::Json(NameResponse {
        truncated: untruncated_length > max_length,
        length: name.len(),
        name,
        max_length,
    }))
}
