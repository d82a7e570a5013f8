//! Combines per-field outcomes into a single form validity flag

use super::validation::Outcome;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// True only when every outcome is `Valid`.
pub fn all_valid(outcomes: &[Outcome]) -> bool {
    outcomes.iter().all(Outcome::is_valid)
}

/// Recomputes form validity whenever any of the four outcome slots changes.
///
/// Each recompute reads the current value of every slot, so the result
/// never depends on the order in which fields settled.
pub struct ValidationReducer {
    validity: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl ValidationReducer {
    /// Must be called from within a tokio runtime.
    pub fn spawn(slots: [watch::Receiver<Outcome>; 4]) -> Self {
        let initial = all_valid(&slots.each_ref().map(|slot| *slot.borrow()));
        let (tx, validity) = watch::channel(initial);
        let task = tokio::spawn(run(slots, tx));
        Self { validity, task }
    }

    pub fn is_valid(&self) -> bool {
        *self.validity.borrow()
    }

    /// The returned receiver has already seen the current value.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        let mut rx = self.validity.clone();
        rx.borrow_and_update();
        rx
    }
}

impl Drop for ValidationReducer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(mut slots: [watch::Receiver<Outcome>; 4], validity: watch::Sender<bool>) {
    loop {
        let changed = {
            let [a, b, c, d] = &mut slots;
            tokio::select! {
                r = a.changed() => r,
                r = b.changed() => r,
                r = c.changed() => r,
                r = d.changed() => r,
            }
        };
        if changed.is_err() {
            break;
        }

        let snapshot = slots.each_mut().map(|slot| *slot.borrow_and_update());
        let valid = all_valid(&snapshot);
        let updated = validity.send_if_modified(|current| {
            let modified = *current != valid;
            *current = valid;
            modified
        });
        debug!(valid, updated, "form validity recomputed");
    }
    debug!("outcome slots closed, reducer stopped");
}
