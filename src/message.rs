use crate::models::{Message, VisibleMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::debug;

#[derive(Default)]
struct SlotState {
    current: Option<Shown>,
    generation: u64,
    dismiss: Option<JoinHandle<()>>,
}

struct Shown {
    message: Message,
    hides_at: Instant,
}

/// The one message the board shows at a time.
///
/// Every `show` replaces the current message and its dismiss timer.
pub struct MessageSlot {
    state: Arc<Mutex<SlotState>>,
    ttl: Duration,
}

impl MessageSlot {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState::default())),
            ttl,
        }
    }

    pub async fn show(&self, message: Message) {
        let mut state = self.state.lock().await;
        if let Some(previous) = state.dismiss.take() {
            previous.abort();
        }
        state.generation += 1;
        let generation = state.generation;
        state.current = Some(Shown {
            message,
            hides_at: Instant::now() + self.ttl,
        });

        let slot = Arc::clone(&self.state);
        let ttl = self.ttl;
        state.dismiss = Some(tokio::spawn(async move {
            sleep(ttl).await;
            let mut state = slot.lock().await;
            // An aborted timer can still be queued on the lock.
            if state.generation == generation {
                state.current = None;
                state.dismiss = None;
                debug!(generation, "message hidden");
            }
        }));
    }

    pub async fn current(&self) -> Option<VisibleMessage> {
        let state = self.state.lock().await;
        let shown = state.current.as_ref()?;
        // The dismiss task may not have taken the lock yet.
        let now = Instant::now();
        if shown.hides_at <= now {
            return None;
        }
        let remaining = shown.hides_at - now;
        Some(VisibleMessage {
            message: shown.message.clone(),
            remaining_ms: u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX),
        })
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        if let Some(timer) = state.dismiss.take() {
            timer.abort();
        }
        state.generation += 1;
        state.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn message_hides_after_ttl() {
        let slot = MessageSlot::new(Duration::from_secs(5));
        slot.show(Message::success("Signed up")).await;

        sleep(Duration::from_millis(4_900)).await;
        let visible = slot.current().await.expect("still visible");
        assert_eq!(visible.message.text, "Signed up");
        assert_eq!(visible.remaining_ms, 100);

        sleep(Duration::from_millis(200)).await;
        assert!(slot.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_timer_does_not_hide_newer_message() {
        let slot = MessageSlot::new(Duration::from_secs(5));
        slot.show(Message::success("first")).await;

        sleep(Duration::from_secs(4)).await;
        slot.show(Message::error("second")).await;

        // Past the first message's deadline.
        sleep(Duration::from_secs(2)).await;
        let visible = slot.current().await.expect("second message visible");
        assert_eq!(visible.message, Message::error("second"));
        assert_eq!(visible.remaining_ms, 3_000);

        sleep(Duration::from_secs(4)).await;
        assert!(slot.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_message_is_not_returned_before_timer_runs() {
        let slot = MessageSlot::new(Duration::ZERO);
        slot.show(Message::error("gone")).await;
        assert!(slot.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_pending_dismiss() {
        let slot = MessageSlot::new(Duration::from_secs(5));
        slot.show(Message::success("bye")).await;
        slot.clear().await;
        assert!(slot.current().await.is_none());

        sleep(Duration::from_secs(10)).await;
        assert!(slot.current().await.is_none());
    }
}
