use thiserror::Error;

/// Ошибки получения покемона
///
/// `Display` is the text shown to the user, so every variant keeps the
/// underlying failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("oh no, network is down! (HTTP {status})")]
    Status { status: u16 },

    #[error("{0}")]
    Network(String),

    #[error("request timed out after {millis} ms")]
    Timeout { millis: u32 },

    #[error("Error throwing pokeballs: {0}")]
    Parse(String),
}

impl FetchError {
    /// Status, transport and timeout failures; everything except `Parse`
    pub fn is_network(&self) -> bool {
        !matches!(self, FetchError::Parse(_))
    }
}
