//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use rustgen_client::GenerationService;
use rustgen_core::{GenerationRequest, TransportFailure};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: GenerationService + Sync + 'static,
{
    match action {
        UpdateAction::Generate { request } => {
            spawn_generation(request, msg_tx, service);
        }
    }
}

/// Run one generation request and report the result back to the loop.
///
/// The request is never retried; the update loop decides whether the
/// completion is still current.
pub fn spawn_generation<S>(
    request: GenerationRequest,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> JoinHandle<()>
where
    S: GenerationService + Sync + 'static,
{
    tokio::spawn(async move {
        let submission = request.submission;
        let message = match service.generate(&request).await {
            Ok(body) => Message::GenerationSucceeded { submission, body },
            Err(e) => {
                warn!("Generation for submission {} failed: {}", submission, e);
                Message::GenerationFailed {
                    submission,
                    failure: TransportFailure::from_error(&e),
                }
            }
        };

        if msg_tx.send(message).await.is_err() {
            debug!(
                "Message channel closed before submission {} completed",
                submission
            );
        }
    })
}
