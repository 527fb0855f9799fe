//! C14 — Scheduler.
//!
//! A single `tokio::time::interval` ticker with an implicit single-flight
//! guard (the loop never starts a new cycle while awaiting the previous
//! one) plus a bounded(1) `TriggerNow` channel for manual runs. On
//! cancellation, an in-flight cycle gets `T_grace` to finish before being
//! dropped.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// A manual trigger request, optionally scoped by caller-supplied filters
/// (e.g. a specific source name for a `collect-now --source=...` run).
#[derive(Debug, Clone, Default)]
pub struct TriggerRequest {
    pub filters: Option<String>,
}

/// Handle used by CLI commands to request an out-of-band cycle. Concurrent
/// triggers beyond the single pending slot are dropped — coalesced into
/// whichever trigger is already queued.
#[derive(Clone)]
pub struct TriggerHandle {
    tx: mpsc::Sender<TriggerRequest>,
}

impl TriggerHandle {
    /// Attempts to enqueue a manual trigger. Returns `false` if one is
    /// already pending — the caller should treat that as "already scheduled",
    /// not an error.
    pub fn trigger_now(&self, filters: Option<String>) -> bool {
        self.tx.try_send(TriggerRequest { filters }).is_ok()
    }
}

pub fn trigger_channel() -> (TriggerHandle, mpsc::Receiver<TriggerRequest>) {
    let (tx, rx) = mpsc::channel(1);
    (TriggerHandle { tx }, rx)
}

/// Runs the periodic scheduler until `cancel` fires. `run_cycle` is invoked
/// once per tick or manual trigger; cycles never overlap since the loop
/// awaits each one to completion (or to the grace deadline) before
/// considering the next tick.
pub async fn run<F, Fut>(
    period: Duration,
    grace: Duration,
    cancel: CancellationToken,
    mut trigger_rx: mpsc::Receiver<TriggerRequest>,
    mut run_cycle: F,
) where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    ticker.tick().await; // first tick fires immediately; consume it without a cycle

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                run_with_grace(&mut run_cycle, None, grace, &cancel).await;
            }
            Some(req) = trigger_rx.recv() => {
                run_with_grace(&mut run_cycle, req.filters, grace, &cancel).await;
            }
        }
        if cancel.is_cancelled() {
            break;
        }
    }
}

async fn run_with_grace<F, Fut>(run_cycle: &mut F, filters: Option<String>, grace: Duration, cancel: &CancellationToken)
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut cycle_fut = Box::pin(run_cycle(filters));

    tokio::select! {
        _ = &mut cycle_fut => return,
        _ = cancel.cancelled() => {}
    }

    tokio::select! {
        _ = &mut cycle_fut => {}
        _ = tokio::time::sleep(grace) => {
            warn!("cycle exceeded shutdown grace period, forcing abort");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn manual_trigger_runs_a_cycle() {
        let (handle, rx) = trigger_channel();
        let cancel = CancellationToken::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let cancel_clone = cancel.clone();
        let task = tokio::spawn(async move {
            run(Duration::from_secs(3600), Duration::from_secs(1), cancel_clone, rx, move |_| {
                let count = count_clone.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                }
            })
            .await;
        });

        tokio::task::yield_now().await;
        handle.trigger_now(None);
        tokio::time::sleep(Duration::from_millis(10)).await;
        cancel.cancel();
        let _ = task.await;

        assert!(count.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn second_trigger_while_pending_is_coalesced() {
        let (handle, _rx) = trigger_channel();
        assert!(handle.trigger_now(None));
        // Channel capacity is 1 and nothing has drained it yet.
        assert!(!handle.trigger_now(None));
    }
}
