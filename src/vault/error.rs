//! Remote I/O faults.
//!
//! `VaultError` describes why a single call against the REST API failed. It
//! never leaves the client: every fault is logged and collapsed into the
//! operation's sentinel (empty listing, absent content, `false`).

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    /// Transport or body-decoding failure reported by reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{endpoint} returned {status}")]
    Status { status: StatusCode, endpoint: String },

    /// The endpoint URL could not be derived from the base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
