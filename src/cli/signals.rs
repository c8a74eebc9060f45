//! Shutdown signal handling for the run command

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::debug;

/// Shutdown signal raised by SIGINT/SIGTERM
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Request shutdown
    pub fn trigger(&self) {
        Self::raise(&self.shutdown, &self.notify);
    }

    /// Wait until shutdown is requested
    pub async fn wait(&self) {
        while !self.is_shutdown() {
            self.notify.notified().await;
        }
    }

    fn raise(shutdown: &AtomicBool, notify: &Notify) {
        shutdown.store(true, Ordering::SeqCst);
        notify.notify_one();
    }

    /// Setup signal handlers
    #[cfg(unix)]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        let shutdown = Arc::clone(&self.shutdown);
        let notify = Arc::clone(&self.notify);

        tokio::spawn(async move {
            tokio::select! {
                _ = sigint.recv() => debug!("Received SIGINT"),
                _ = sigterm.recv() => debug!("Received SIGTERM"),
            }
            Self::raise(&shutdown, &notify);
        });

        Ok(())
    }

    /// Setup signal handlers
    #[cfg(not(unix))]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        let shutdown = Arc::clone(&self.shutdown);
        let notify = Arc::clone(&self.notify);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Received Ctrl+C");
                Self::raise(&shutdown, &notify);
            }
        });

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
