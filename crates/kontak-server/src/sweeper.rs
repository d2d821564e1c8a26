//! Periodic cleanup of expired admin sessions.
//!
//! Best-effort housekeeping: the auth extractor rejects expired tokens
//! on its own, so a missed sweep never admits anyone. The task is owned
//! by the process lifecycle and stops when asked.

use std::time::Duration;

use kontak_core::ContactStore;
use tokio::{sync::watch, task::JoinHandle, time};

/// How often expired sessions are reclaimed.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Handle for the background sweep task.
pub struct SessionSweeper {
  stop: watch::Sender<bool>,
  task: JoinHandle<()>,
}

impl SessionSweeper {
  /// Start sweeping `store` every `interval`. The first tick fires
  /// immediately, reclaiming anything left behind by a previous run.
  pub fn spawn<S>(store: S, interval: Duration) -> Self
  where
    S: ContactStore + Clone + Send + Sync + 'static,
  {
    let (stop, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
      let mut ticker = time::interval(interval);
      loop {
        tokio::select! {
          _ = ticker.tick() => {
            match store.delete_expired_sessions().await {
              Ok(0) => {}
              Ok(n) => tracing::info!(count = n, "swept expired admin sessions"),
              Err(e) => tracing::warn!(error = %e, "session sweep failed"),
            }
          }
          _ = stopped.changed() => break,
        }
      }
      tracing::debug!("session sweeper stopped");
    });

    Self { stop, task }
  }

  /// Stop the sweep loop and wait for the task to finish.
  pub async fn shutdown(self) {
    let _ = self.stop.send(true);
    let _ = self.task.await;
  }
}
