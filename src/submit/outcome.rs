use crate::submit::transport::{TransportError, TransportResponse};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn from_result(result: Result<TransportResponse, TransportError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Self::Success(response.body),
            Ok(response) => Self::Failure(status_details(&response)),
            Err(err) => Self::Failure(err.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

fn status_details(response: &TransportResponse) -> String {
    if response.body.trim().is_empty() {
        format!("HTTP {}", response.status)
    } else {
        format!("HTTP {}: {}", response.status, response.body)
    }
}
