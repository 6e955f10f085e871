use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::debug;

use crate::api::ApiClient;
use crate::model::{FetchOutcome, FetchRequest};

/// Most completions applied per poll so one burst cannot starve input.
const MAX_OUTCOMES_PER_POLL: usize = 32;

/// Runs fetches on the background runtime and hands completions back to
/// the input loop.
pub struct Fetcher {
    client: ApiClient,
    rt: Arc<tokio::runtime::Runtime>,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
}

impl Fetcher {
    pub fn new(client: ApiClient, rt: Arc<tokio::runtime::Runtime>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { client, rt, sender, receiver }
    }

    /// Start a request and return immediately. Requests are never coalesced.
    pub fn dispatch(&self, request: FetchRequest) {
        let client = self.client.clone();
        let sender = self.sender.clone();
        debug!(kind = request.kind(), "spawning fetch");
        self.rt.spawn(async move {
            let outcome = client.execute(request).await;
            // Receiver only goes away on shutdown.
            let _ = sender.send(outcome);
        });
    }

    /// Drain finished fetches in arrival order without blocking.
    pub fn poll(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while outcomes.len() < MAX_OUTCOMES_PER_POLL {
            match self.receiver.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        outcomes
    }
}
