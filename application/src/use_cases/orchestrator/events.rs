//! Observer registry for [`GameEvent`]s

use crate::ports::game_event::GameEvent;
use tokio::sync::mpsc;

#[derive(Default)]
pub(super) struct EventHub {
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl EventHub {
    /// Register a subscriber, delivering `initial` to it alone first.
    pub(super) fn subscribe(
        &mut self,
        initial: Vec<GameEvent>,
    ) -> mpsc::UnboundedReceiver<GameEvent> {
        self.subscribers.retain(|tx| !tx.is_closed());

        let (tx, rx) = mpsc::unbounded_channel();
        for event in initial {
            let _ = tx.send(event);
        }
        self.subscribers.push(tx);
        rx
    }

    /// Send to every live subscriber. Dropped receivers are skipped and
    /// pruned on the next `subscribe`.
    pub(super) fn publish(&self, event: GameEvent) {
        for tx in &self.subscribers {
            let _ = tx.send(event.clone());
        }
    }
}
