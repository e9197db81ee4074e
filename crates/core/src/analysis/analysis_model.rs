//! Analysis domain models.

/// Content type attached to every relayed analysis response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Response from the analysis service, relayed to the caller unmodified.
///
/// The body is opaque: it is never parsed, so upstream error payloads pass
/// through exactly as the service produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}
