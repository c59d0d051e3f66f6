/// Errors from the streaming boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A chunk payload could not be parsed. The chunk is skipped and the
    /// stream continues.
    #[error("malformed stream event: {reason}")]
    MalformedEvent { reason: String },

    /// The transport delivered a terminal error event. The message is
    /// marked failed with this text; the engine never retries.
    #[error("stream terminated with error: {message}")]
    Terminal { message: String },
}
