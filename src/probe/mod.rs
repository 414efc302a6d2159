// src/probe/mod.rs
mod runner;
mod status;

pub use runner::{ProbeError, ProbeRunner, STATUS_CLIENT_NAME};
pub use status::{StatusRecord, StatusRequest};
