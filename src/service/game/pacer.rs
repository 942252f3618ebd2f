use std::time::Duration;

use tokio::sync::watch;

/// Sleeps between reveal steps, waking early when the process shuts down.
#[derive(Clone)]
pub struct RevealPacer {
    shutdown: watch::Receiver<bool>,
}

impl RevealPacer {
    /// Creates a pacer along with the sender used to signal shutdown.
    ///
    /// Sending `true` aborts every pause in progress and every pause after it.
    pub fn channel() -> (watch::Sender<bool>, Self) {
        let (sender, shutdown) = watch::channel(false);
        (sender, Self { shutdown })
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Waits for `duration`.
    ///
    /// # Returns
    /// - `true` - The full duration elapsed
    /// - `false` - Shutdown was signalled before or during the pause
    pub async fn pause(&self, duration: Duration) -> bool {
        if self.is_shutting_down() {
            return false;
        }
        if duration.is_zero() {
            return true;
        }

        let mut shutdown = self.shutdown.clone();
        tokio::select! {
            _ = tokio::time::sleep(duration) => true,
            Ok(_) = shutdown.wait_for(|stopping| *stopping) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests a pause running to completion.
    ///
    /// Expected: true after the full duration on the paused clock
    #[tokio::test(start_paused = true)]
    async fn completes_without_shutdown() {
        let (_sender, pacer) = RevealPacer::channel();
        let start = tokio::time::Instant::now();

        assert!(pacer.pause(Duration::from_secs(3)).await);
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    /// Tests shutdown arriving mid-pause.
    ///
    /// Expected: false well before the pause would have ended
    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_pause() {
        let (sender, pacer) = RevealPacer::channel();
        let start = tokio::time::Instant::now();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = sender.send(true);
        });

        assert!(!pacer.pause(Duration::from_secs(60)).await);
        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn refuses_to_pause_after_shutdown() {
        let (sender, pacer) = RevealPacer::channel();
        sender.send(true).unwrap();

        assert!(pacer.is_shutting_down());
        assert!(!pacer.pause(Duration::from_secs(60)).await);
    }

    /// Tests that dropping the sender does not count as shutdown.
    ///
    /// Expected: the pause still completes
    #[tokio::test(start_paused = true)]
    async fn dropped_sender_is_not_shutdown() {
        let (sender, pacer) = RevealPacer::channel();
        drop(sender);

        assert!(pacer.pause(Duration::from_secs(1)).await);
    }
}
