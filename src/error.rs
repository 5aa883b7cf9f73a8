use crate::location::error::LocationError;
use crate::readings::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AqiError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("unable to encode the station summary")]
    SummaryEncode(#[source] serde_json::Error),

    #[error("failed to initialize the terminal")]
    TerminalInit(#[source] std::io::Error),

    #[error("terminal I/O failed")]
    TerminalIo(#[source] std::io::Error),
}
