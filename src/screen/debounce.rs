//! Debounced input coalescing.
//!
//! Rapid successive inputs (keystrokes in a search box) are held until the
//! input has been quiet for the configured window, then the latest value is
//! delivered once. Superseded values are never delivered.

use std::time::Duration;
use tokio::sync::mpsc;

/// Sender half of a debouncer. Feed it every raw input; the paired receiver
/// yields one settled value per quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the debounce worker and returns the input handle plus the
    /// settled-value receiver.
    #[must_use]
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
        let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            let mut latest: Option<T> = None;
            loop {
                tokio::select! {
                    incoming = in_rx.recv() => match incoming {
                        // A newer value restarts the quiet window
                        Some(value) => latest = Some(value),
                        None => {
                            // Input handle dropped: flush whatever is pending
                            if let Some(value) = latest.take() {
                                let _ = out_tx.send(value);
                            }
                            break;
                        }
                    },
                    () = tokio::time::sleep(window), if latest.is_some() => {
                        if let Some(value) = latest.take()
                            && out_tx.send(value).is_err()
                        {
                            break;
                        }
                    }
                }
            }
        });

        (Self { tx: in_tx }, out_rx)
    }

    /// Feeds one raw input. Never blocks.
    pub fn input(&self, value: T) {
        let _ = self.tx.send(value);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_inputs_settle_once() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(500));

        debouncer.input("a");
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.input("ab");
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.input("abc");

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(rx.recv().await.unwrap(), "abc");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_periods_deliver_separately() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(500));

        debouncer.input("first");
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(rx.recv().await.unwrap(), "first");

        debouncer.input("second");
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(rx.recv().await.unwrap(), "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_flushes_pending_value() {
        let (debouncer, mut rx) = Debouncer::new(Duration::from_millis(500));
        debouncer.input("pending");
        drop(debouncer);
        assert_eq!(rx.recv().await.unwrap(), "pending");
    }
}
