//! Owned delayed actions. Dropping a handle cancels the task behind it.

use std::future::Future;

use tokio::task::JoinHandle;

pub(crate) struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
