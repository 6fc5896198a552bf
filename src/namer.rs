use tracing::debug;

use crate::error::NamerError;
use crate::hash::{DIGEST_HEX_LEN, hash_text};

pub const SEPARATOR: char = '-';
/// Budget taken by `-<digest>-` when a suffix is kept.
pub const SEPARATOR_AND_DIGEST_OVERHEAD: usize = DIGEST_HEX_LEN + 2;
/// Budget taken by `-<digest>` when the suffix is dropped.
pub const DIGEST_WITH_SEPARATOR_LEN: usize = DIGEST_HEX_LEN + 1;

pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

/// Length bound of the naming system a generated name is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLimit {
    #[default]
    Subdomain,
    Label,
    Custom(usize),
}

impl NameLimit {
    pub fn max_length(self) -> usize {
        match self {
            Self::Subdomain => DNS1123_SUBDOMAIN_MAX_LENGTH,
            Self::Label => DNS1123_LABEL_MAX_LENGTH,
            Self::Custom(max_length) => max_length,
        }
    }
}

/// Joins `base` and `suffix` with a dash, shortening the result to at most
/// `max_length` bytes.
///
/// When the joined name is too long the base is truncated and a digest is
/// inserted so that bases sharing a truncated prefix still yield different
/// names: `<base>-<hash(base)>-<suffix>`. If the suffix alone leaves no room,
/// it is dropped and the digest covers the full joined name instead:
/// `<base>-<hash(base-suffix)>`.
///
/// Lengths are byte lengths. A cut that would split a multi-byte character
/// backs off to the previous character boundary.
pub fn compose_name(base: &str, suffix: &str, max_length: usize) -> Result<String, NamerError> {
    if base.is_empty() {
        return Err(NamerError::EmptyBase);
    }

    let candidate = format!("{base}{SEPARATOR}{suffix}");
    if candidate.len() <= max_length {
        return Ok(candidate);
    }

    match max_length.checked_sub(SEPARATOR_AND_DIGEST_OVERHEAD + suffix.len()) {
        Some(base_budget) => {
            let prefix = truncate_to_boundary(base, base_budget);
            let name = format!("{prefix}{SEPARATOR}{}{SEPARATOR}{suffix}", hash_text(base));
            debug!(
                max_length,
                base_budget,
                length = name.len(),
                "truncated base and kept suffix"
            );
            Ok(name)
        }
        None => {
            if max_length < DIGEST_WITH_SEPARATOR_LEN {
                return Err(NamerError::MaxLengthTooSmall {
                    max_length,
                    minimum: DIGEST_WITH_SEPARATOR_LEN,
                });
            }
            let prefix = truncate_to_boundary(base, max_length - DIGEST_WITH_SEPARATOR_LEN);
            let name = format!("{prefix}{SEPARATOR}{}", hash_text(&candidate));
            debug!(
                max_length,
                suffix_len = suffix.len(),
                length = name.len(),
                "suffix does not fit; dropped it"
            );
            Ok(name)
        }
    }
}

pub fn compose_name_within(
    base: &str,
    suffix: &str,
    limit: NameLimit,
) -> Result<String, NamerError> {
    compose_name(base, suffix, limit.max_length())
}

/// Name for a pod derived from `base`, bounded like a DNS-1123 subdomain.
pub fn pod_name(base: &str, suffix: &str) -> Result<String, NamerError> {
    compose_name_within(base, suffix, NameLimit::Subdomain)
}

/// Returns `name` unchanged if it fits, otherwise a prefix of `name`
/// followed by its digest, cut to `max_length` bytes. When `max_length` is
/// smaller than the digest only a digest fragment remains.
pub fn limit_length(name: &str, max_length: usize) -> String {
    if max_length == 0 {
        return String::new();
    }
    if name.len() <= max_length {
        return name.to_string();
    }

    let digest = hash_text(name);
    let prefix = truncate_to_boundary(name, max_length.saturating_sub(digest.len()));
    let short_name = format!("{prefix}{digest}");
    let limited = truncate_to_boundary(&short_name, max_length).to_string();
    debug!(max_length, length = limited.len(), "limited name length");
    limited
}

fn truncate_to_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
