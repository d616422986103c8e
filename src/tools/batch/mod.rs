//! Batch Tools


use futures_util::stream::{self, StreamExt};

/// Run async operations with bounded concurrency, returning results in input order.
///
/// At most `concurrency` futures are in flight; a `concurrency` of 0 is treated as 1.
pub async fn batch<T, F, Fut, R>(items: Vec<T>, concurrency: usize, operation: F) -> Vec<R>
where
    F: FnMut(T) -> Fut,
    Fut: std::future::Future<Output = R>,
{
    stream::iter(items)
        .map(operation)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
