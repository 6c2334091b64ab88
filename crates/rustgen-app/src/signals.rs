//! OS signal handling
//!
//! SIGINT and SIGTERM do not exit directly. They are delivered to the update
//! loop as [`Message::Shutdown`], which records what was abandoned and quits.

use std::fmt;

use rustgen_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Termination signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Wait for the first termination signal and forward it to the loop
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(signal) => {
                notify_shutdown(&tx, signal).await;
            }
            Err(e) => error!("Signal handler unavailable, only Ctrl+C/Ctrl+Q quit: {}", e),
        }
    })
}

/// Returns `false` when the loop has already exited
async fn notify_shutdown(tx: &mpsc::Sender<Message>, signal: ShutdownSignal) -> bool {
    match tx.send(Message::Shutdown(signal)).await {
        Ok(()) => true,
        Err(e) => {
            debug!(
                "{}",
                Error::channel_send(format!("{} arrived after the loop exited: {}", signal, e))
            );
            false
        }
    }
}

async fn next_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
        };
        let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

        let received = tokio::select! {
            _ = interrupt.recv() => ShutdownSignal::Interrupt,
            _ = terminate.recv() => ShutdownSignal::Terminate,
        };
        Ok(received)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
        Ok(ShutdownSignal::Interrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
    }

    #[tokio::test]
    async fn test_notify_shutdown_reaches_loop() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        assert!(notify_shutdown(&tx, ShutdownSignal::Terminate).await);
        assert!(matches!(
            rx.try_recv(),
            Ok(Message::Shutdown(ShutdownSignal::Terminate))
        ));
    }

    #[tokio::test]
    async fn test_notify_shutdown_after_loop_exit() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        assert!(!notify_shutdown(&tx, ShutdownSignal::Interrupt).await);
    }

    #[tokio::test]
    async fn test_handler_waits_for_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }
}
