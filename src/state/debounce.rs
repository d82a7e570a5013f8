//! Debounced evaluation of a watched input
//!
//! A [`DebouncedChannel`] owns a background task that waits for writes to a
//! `watch` input, lets a quiet period elapse without further writes, and then
//! evaluates the latest value. A write during the quiet period restarts it, so
//! a superseded value is never evaluated.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Background stage that turns bursts of input writes into a single
/// evaluation published on its own `watch` output.
///
/// The task is the only writer of the output. It stops when every input
/// sender is gone or when the channel is dropped.
pub struct DebouncedChannel<O> {
    output: watch::Receiver<O>,
    task: JoinHandle<()>,
}

impl<O> DebouncedChannel<O>
where
    O: Clone + PartialEq + Send + Sync + 'static,
{
    /// Spawn a channel that evaluates only after the input is written.
    ///
    /// `evaluate` returning `None` leaves the output untouched.
    /// Must be called from within a tokio runtime.
    pub fn spawn<I, F>(
        name: &'static str,
        input: watch::Receiver<I>,
        quiet: Duration,
        initial: O,
        evaluate: F,
    ) -> Self
    where
        I: Send + Sync + 'static,
        F: Fn(&I) -> Option<O> + Send + 'static,
    {
        Self::start(name, input, quiet, initial, evaluate, false)
    }

    /// Like [`DebouncedChannel::spawn`], but the value already in the input
    /// is evaluated once after the first quiet period.
    pub fn spawn_primed<I, F>(
        name: &'static str,
        input: watch::Receiver<I>,
        quiet: Duration,
        initial: O,
        evaluate: F,
    ) -> Self
    where
        I: Send + Sync + 'static,
        F: Fn(&I) -> Option<O> + Send + 'static,
    {
        Self::start(name, input, quiet, initial, evaluate, true)
    }

    fn start<I, F>(
        name: &'static str,
        input: watch::Receiver<I>,
        quiet: Duration,
        initial: O,
        evaluate: F,
        primed: bool,
    ) -> Self
    where
        I: Send + Sync + 'static,
        F: Fn(&I) -> Option<O> + Send + 'static,
    {
        let (tx, output) = watch::channel(initial);
        let task = tokio::spawn(run(name, input, quiet, evaluate, tx, primed));
        Self { output, task }
    }

    /// Current published value
    pub fn get(&self) -> O {
        self.output.borrow().clone()
    }

    /// Observe values published from now on.
    ///
    /// The returned receiver has already seen the current value.
    pub fn subscribe(&self) -> watch::Receiver<O> {
        let mut rx = self.output.clone();
        rx.borrow_and_update();
        rx
    }
}

impl<O> Drop for DebouncedChannel<O> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<I, O, F>(
    name: &'static str,
    mut input: watch::Receiver<I>,
    quiet: Duration,
    evaluate: F,
    output: watch::Sender<O>,
    mut primed: bool,
) where
    O: PartialEq,
    F: Fn(&I) -> Option<O>,
{
    loop {
        if !primed && input.changed().await.is_err() {
            break;
        }
        primed = false;

        // Each write restarts the quiet period.
        loop {
            tokio::select! {
                _ = tokio::time::sleep(quiet) => break,
                changed = input.changed() => {
                    if changed.is_err() {
                        debug!(channel = name, "input closed while pending");
                        return;
                    }
                }
            }
        }

        let result = {
            let latest = input.borrow_and_update();
            evaluate(&*latest)
        };

        match result {
            Some(value) => {
                let updated = output.send_if_modified(|current| {
                    if *current == value {
                        false
                    } else {
                        *current = value;
                        true
                    }
                });
                debug!(channel = name, updated, "debounce settled");
            }
            None => debug!(channel = name, "debounce settled, evaluation skipped"),
        }
    }
    debug!(channel = name, "input closed");
}
