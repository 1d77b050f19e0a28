//! Deferred work produced by update functions.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

/// A batch of futures that each resolve into one message.
///
/// Updates return these instead of awaiting anything themselves; the
/// runtime spawns the futures and feeds the resulting messages back into
/// the update loop.
pub struct Task<M>(Vec<BoxFuture<'static, M>>);

impl<M> std::fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({} futures)", self.0.len())
    }
}

impl<M: Send + 'static> Task<M> {
    /// A task that does nothing.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// A task that immediately yields `message`.
    pub fn done(message: M) -> Self {
        Self(vec![std::future::ready(message).boxed()])
    }

    /// Run `future` and map its output into a message.
    pub fn perform<T, F, Map>(future: F, map: Map) -> Self
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        Map: FnOnce(T) -> M + Send + 'static,
    {
        Self(vec![async move { map(future.await) }.boxed()])
    }

    /// Combine several tasks into one.
    pub fn batch(tasks: impl IntoIterator<Item = Task<M>>) -> Self {
        Self(tasks.into_iter().flat_map(|task| task.0).collect())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Hand the futures over to whatever spawns them.
    pub fn into_futures(self) -> Vec<BoxFuture<'static, M>> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn done_yields_immediately() {
        let task: Task<u32> = Task::done(7);
        let mut futures = task.into_futures();
        assert_eq!(futures.len(), 1);
        assert_eq!(futures.pop().unwrap().await, 7);
    }

    #[tokio::test]
    async fn batch_flattens() {
        let task = Task::batch([Task::done(1), Task::none(), Task::done(2)]);
        let futures = task.into_futures();
        assert_eq!(futures.len(), 2);
    }
}
