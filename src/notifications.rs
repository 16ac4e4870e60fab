//! Turns api failures into toasts.
//!
//! The client only publishes [`Failure`]s. Whatever renders them subscribes
//! here, so code that never shows a toast does not depend on a renderer.

use riffs::Failure;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

pub const FAILURE_TITLE: &str = "Request Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: Variant,
    pub title: String,
    pub description: String,
}

impl From<Failure> for Toast {
    fn from(failure: Failure) -> Self {
        Self {
            variant: Variant::Destructive,
            title: FAILURE_TITLE.to_owned(),
            description: failure.message,
        }
    }
}

pub trait Notifier: Send + 'static {
    fn show(&mut self, toast: Toast);
}

/// Prints toasts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&mut self, toast: Toast) {
        match toast.variant {
            Variant::Destructive => eprintln!("✖ {}: {}", toast.title, toast.description),
            Variant::Default => eprintln!("{}: {}", toast.title, toast.description),
        }
    }
}

/// Hands toasts to a ui loop that renders them itself.
impl Notifier for UnboundedSender<Toast> {
    fn show(&mut self, toast: Toast) {
        let _ = self.send(toast);
    }
}

/// Shows a toast for every failure until all clients are dropped.
pub fn start(mut failures: Receiver<Failure>, mut notifier: impl Notifier) -> JoinHandle<()> {
    tokio::task::spawn(async move {
        loop {
            match failures.recv().await {
                Ok(failure) => {
                    trace!(endpoint = failure.endpoint, "showing failure toast");
                    notifier.show(failure.into());
                }
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "dropped failure toasts"),
                Err(RecvError::Closed) => break,
            }
        }
    })
}
