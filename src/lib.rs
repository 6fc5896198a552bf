pub mod cli;
pub mod error;
pub mod hash;
pub mod namer;

pub use namer::{NameLimit, compose_name, compose_name_within, limit_length, pod_name};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
