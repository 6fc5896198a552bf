use clap::Args;
use serde::Serialize;

use crate::cli::CommandOutput;
use crate::hash::hash_text;

#[derive(Debug, Args)]
pub struct DigestArgs {
    #[arg(value_name = "TEXT", help = "Input hashed as raw UTF-8 bytes")]
    pub text: String,
    #[arg(long, help = "Emit structured JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub input: String,
    pub digest: String,
}

pub fn run_digest(args: DigestArgs) -> CommandOutput<DigestResponse> {
    let digest = hash_text(&args.text);
    if args.json {
        CommandOutput::Json(DigestResponse {
            input: args.text,
            digest,
        })
    } else {
        CommandOutput::Text(digest)
    }
}
