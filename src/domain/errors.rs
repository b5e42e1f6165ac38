/// Failures at the HTTP boundary. Components only ever show these as text.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never produced a response (offline, CORS, DNS).
    Request(String),
    /// Non-2xx status. `message` is whatever display string the body offered.
    Status { code: u16, message: Option<String> },
    /// The body was not the JSON shape we read.
    Decode(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Request(msg) => write!(f, "request failed: {}", msg),
            GatewayError::Status { code, message: Some(msg) } => write!(f, "HTTP {}: {}", code, msg),
            GatewayError::Status { code, message: None } => write!(f, "HTTP {}", code),
            GatewayError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl GatewayError {
    /// The server-provided explanation, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
