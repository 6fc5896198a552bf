use clap::Args;

use crate::cli::{CommandOutput, NameResponse};
use crate::namer::limit_length;

#[derive(Debug, Args)]
pub struct LimitArgs {
    #[arg(value_name = "NAME", help = "Name to shorten")]
    pub name: String,
    #[arg(long, value_name = "N", help = "Maximum length in bytes; 0 yields an empty name")]
    pub max_length: usize,
    #[arg(long, help = "Emit structured JSON output")]
    pub json: bool,
}

pub fn run_limit(args: LimitArgs) -> CommandOutput<NameResponse> {
    let name = limit_length(&args.name, args.max_length);
    if !args.json {
        return CommandOutput::Text(name);
    }

    CommandOutput::Json(NameResponse {
        truncated: name != args.name,
        length: name.len(),
        name,
        max_length: args.max_length,
    })
}
