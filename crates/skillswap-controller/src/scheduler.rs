//! Timer execution on the tokio runtime
//!
//! Each scheduled timer is a task that sleeps and then reports back through
//! an unbounded channel. Timers are keyed by their [`TimerEvent`]: scheduling
//! a key again or cancelling it stops the pending task, and a report that was
//! already in flight is discarded by [`Scheduler::complete`] via its
//! generation number.

use crate::controller::Effect;
use skillswap_types::TimerEvent;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// A timer that elapsed and was reported back to the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub timer: TimerEvent,
    generation: u64,
}

struct PendingTimer {
    generation: u64,
    token: CancellationToken,
}

/// Runs [`Effect`]s as cancellable tokio tasks
pub struct Scheduler {
    tx: mpsc::UnboundedSender<FiredTimer>,
    root: CancellationToken,
    pending: HashMap<TimerEvent, PendingTimer>,
    next_generation: u64,
}

impl Scheduler {
    /// Create a scheduler and the receiver fired timers arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FiredTimer>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            root: CancellationToken::new(),
            pending: HashMap::new(),
            next_generation: 0,
        };
        (scheduler, rx)
    }

    /// Execute effects in order
    pub fn apply(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { timer, after } => self.schedule(timer, after),
                Effect::Cancel(timer) => self.cancel(timer),
            }
        }
    }

    /// Start `timer`, replacing a pending one with the same key
    pub fn schedule(&mut self, timer: TimerEvent, after: Duration) {
        self.cancel(timer);

        self.next_generation += 1;
        let generation = self.next_generation;
        let token = self.root.child_token();
        let task_token = token.clone();
        let tx = self.tx.clone();

        trace!("Scheduling {:?} in {:?}", timer, after);
        tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(after) => {
                    // Receiver gone means the loop shut down
                    let _ = tx.send(FiredTimer { timer, generation });
                }
            }
        });

        self.pending.insert(timer, PendingTimer { generation, token });
    }

    /// Stop a pending timer; no-op when none is pending
    pub fn cancel(&mut self, timer: TimerEvent) {
        if let Some(pending) = self.pending.remove(&timer) {
            debug!("Cancelled {:?}", timer);
            pending.token.cancel();
        }
    }

    /// Accept a fired timer if it is still the pending one for its key
    pub fn complete(&mut self, fired: FiredTimer) -> Option<TimerEvent> {
        match self.pending.get(&fired.timer) {
            Some(pending) if pending.generation == fired.generation => {
                self.pending.remove(&fired.timer);
                Some(fired.timer)
            }
            _ => {
                debug!("Discarding stale {:?}", fired.timer);
                None
            }
        }
    }

    /// Number of timers not yet completed or cancelled
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Cancel every pending timer
    pub fn shutdown(&mut self) {
        self.root.cancel();
        self.pending.clear();
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_types::NotificationId;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (mut scheduler, mut rx) = Scheduler::new();
        scheduler.schedule(TimerEvent::HideOverlay, Duration::from_millis(1500));

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        let fired = rx.recv().await.unwrap();
        assert_eq!(scheduler.complete(fired), Some(TimerEvent::HideOverlay));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (mut scheduler, mut rx) = Scheduler::new();
        scheduler.schedule(TimerEvent::HideOverlay, Duration::from_millis(100));
        scheduler.cancel(TimerEvent::HideOverlay);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_discards_in_flight_report() {
        let (mut scheduler, mut rx) = Scheduler::new();
        scheduler.schedule(TimerEvent::HideOverlay, Duration::from_millis(100));

        // Let the first timer report, then replace it before the loop reads it
        tokio::time::sleep(Duration::from_millis(150)).await;
        scheduler.schedule(TimerEvent::HideOverlay, Duration::from_millis(100));

        let stale = rx.recv().await.unwrap();
        assert_eq!(scheduler.complete(stale), None);

        let fresh = rx.recv().await.unwrap();
        assert_eq!(scheduler.complete(fresh), Some(TimerEvent::HideOverlay));
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_timers() {
        let (mut scheduler, mut rx) = Scheduler::new();
        let first = TimerEvent::FadeNotification(NotificationId(1));
        let second = TimerEvent::FadeNotification(NotificationId(2));
        scheduler.schedule(first, Duration::from_millis(3000));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        scheduler.schedule(second, Duration::from_millis(3000));
        assert_eq!(scheduler.pending(), 2);

        let a = rx.recv().await.unwrap();
        assert_eq!(scheduler.complete(a), Some(first));
        let b = rx.recv().await.unwrap();
        assert_eq!(scheduler.complete(b), Some(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_everything() {
        let (mut scheduler, mut rx) = Scheduler::new();
        scheduler.schedule(TimerEvent::HideOverlay, Duration::from_millis(10));
        scheduler.schedule(
            TimerEvent::FadeNotification(NotificationId(1)),
            Duration::from_millis(10),
        );
        scheduler.shutdown();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }
}
