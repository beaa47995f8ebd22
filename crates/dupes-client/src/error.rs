use thiserror::Error;

/// The single failure kind of the remote path.
///
/// Connectivity problems (including timeouts), non-success statuses and
/// undecodable payloads are all the same externally observable failure: the
/// fetch produced no usable sequence. No variant carries a partial result.
#[derive(Error, Debug)]
pub enum RemoteFetchError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Decode error: {0}")]
    Decode(String),
}
