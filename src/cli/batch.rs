use std::io::Read;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::cli::{LimitPreset, NameResponse, resolve_limit};
use crate::error::NamerError;
use crate::namer::compose_name;

#[derive(Debug, Args)]
pub struct BatchArgs {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeRequest {
    pub base: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub limit: Option<LimitPreset>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub names: Vec<NameResponse>,
    pub summary: BatchSummary,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub truncated: usize,
}

pub fn run_batch(_args: BatchArgs) -> Result<BatchResponse, NamerError> {
    let mut request_body = String::new();
    std::io::stdin()
        .read_to_string(&mut request_body)
        .map_err(|error| NamerError::StdinRead { source: error })?;

    compose_batch(&request_body)
}

pub fn compose_batch(request_body: &str) -> Result<BatchResponse, NamerError> {
    let requests: Vec<ComposeRequest> = serde_json::from_str(request_body)
        .map_err(|error| NamerError::InvalidJsonRequest { source: error })?;

    let names = requests
        .iter()
        .enumerate()
        .map(|(index, request)| compose_one(index, request))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = BatchSummary {
        total: names.len(),
        truncated: names.iter().filter(|name| name.truncated).count(),
    };
    Ok(BatchResponse { names, summary })
}

fn compose_one(index: usize, request: &ComposeRequest) -> Result<NameResponse, NamerError> {
    if request.max_length.is_some() && request.limit.is_some() {
        return Err(NamerError::InvalidRequest {
            message: format!(
                "Request {index} sets both 'max_length' and 'limit'; provide at most one"
            ),
        });
    }

    let max_length = resolve_limit(request.max_length, request.limit).max_length();
    let name = compose_name(&request.base, &request.suffix, max_length)?;
    let untruncated_length = request.base.len() + 1 + request.suffix.len();

    Ok(NameResponse {
        truncated: untruncated_length > max_length,
        length: name.len(),
        name,
        max_length,
    })
}
