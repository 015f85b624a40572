//! Bounded batch runner: a fixed pool of workers drains a shared index
//! counter, each result landing in its own output slot.
//!
//! A failing item becomes `None` in its slot; it never stops the other
//! workers or the remaining items.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Concurrency cap for catalog fetches.
pub const CATALOG_CONCURRENCY: usize = 5;

/// Runs `task` over `items` with at most `limit` in flight.
///
/// Returns one slot per item, in input order regardless of completion order.
/// Resolves only after every item has been attempted.
pub async fn run_bounded<T, R, E, F, Fut>(items: Vec<T>, limit: usize, task: F) -> Vec<Option<R>>
where
    T: Clone + Send + Sync + 'static,
    R: Send + Sync + 'static,
    E: Display + Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    let total = items.len();
    let workers = limit.max(1).min(total);
    let items = Arc::new(items);
    let slots: Arc<Vec<OnceLock<R>>> = Arc::new((0..total).map(|_| OnceLock::new()).collect());
    let next = Arc::new(AtomicUsize::new(0));
    let task = Arc::new(task);

    tracing::debug!(total, workers, "starting bounded batch");

    let mut join_set = tokio::task::JoinSet::new();
    for worker in 0..workers {
        let items = Arc::clone(&items);
        let slots = Arc::clone(&slots);
        let next = Arc::clone(&next);
        let task = Arc::clone(&task);
        join_set.spawn(async move {
            loop {
                let index = next.fetch_add(1, Ordering::AcqRel);
                let Some(item) = items.get(index) else {
                    break;
                };
                // Own task per item: a panic is contained to this index.
                match tokio::spawn((*task)(item.clone())).await {
                    Ok(Ok(value)) => {
                        let _ = slots[index].set(value);
                    }
                    Ok(Err(e)) => tracing::debug!(worker, index, "batch item failed: {}", e),
                    Err(e) => tracing::error!(worker, index, "batch item panicked: {}", e),
                }
            }
        });
    }

    while let Some(res) = join_set.join_next().await {
        if let Err(e) = res {
            tracing::error!("batch worker join: {}", e);
        }
    }

    match Arc::into_inner(slots) {
        Some(slots) => slots.into_iter().map(OnceLock::into_inner).collect(),
        None => {
            tracing::error!("batch slots still shared after all workers finished");
            (0..total).map(|_| None).collect()
        }
    }
}
