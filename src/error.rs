use thiserror::Error;

/// The external MegaCli invocation failed before producing a usable report.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} exited with {status}: {stderr}")]
    Failed {
        path: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// The report text no longer matches the field format we expect.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("{field} value {value:?} is not a non-negative integer")]
    MalformedCount { field: &'static str, value: String },
}

/// Everything that can end a poll cycle early. Command and transport
/// failures are transient (the loop logs and waits for the next interval);
/// a parse failure means the report format drifted and is fatal.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Elasticsearch rejected a document (or was unreachable).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Rejected {
        url: String,
        status: u16,
        body: String,
    },
}
