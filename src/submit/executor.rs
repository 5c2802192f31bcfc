use crate::submit::outcome::SubmissionOutcome;
use crate::submit::transport::Transport;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub run_id: u64,
    pub url: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitCompletion {
    pub run_id: u64,
    pub outcome: SubmissionOutcome,
}

pub fn execute_request(transport: &dyn Transport, request: SubmitRequest) -> SubmitCompletion {
    let result = transport.post_json(request.url.as_str(), &request.payload);
    if let Err(err) = &result {
        tracing::warn!(run_id = request.run_id, error = %err, "submission transport failed");
    }
    SubmitCompletion {
        run_id: request.run_id,
        outcome: SubmissionOutcome::from_result(result),
    }
}

/// Runs submissions off the UI thread. Completions are collected with
/// [`SubmitExecutor::drain_ready`].
pub struct SubmitExecutor {
    transport: Arc<dyn Transport>,
    completion_tx: Sender<SubmitCompletion>,
    completion_rx: Receiver<SubmitCompletion>,
}

impl SubmitExecutor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmitCompletion>();
        Self {
            transport,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, request: SubmitRequest) {
        let transport = Arc::clone(&self.transport);
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let completion = execute_request(transport.as_ref(), request);
            let _ = completion_tx.send(completion);
        });
    }

    pub fn drain_ready(&self) -> Vec<SubmitCompletion> {
        let mut out = Vec::<SubmitCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}
