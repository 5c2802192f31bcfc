pub mod executor;
pub mod outcome;
pub mod transport;

pub use executor::{SubmitCompletion, SubmitExecutor, SubmitRequest, execute_request};
pub use outcome::SubmissionOutcome;
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
