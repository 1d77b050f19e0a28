//! The update loop: messages in, state mutations and spawned tasks out.

use std::sync::Arc;

use cineview_client::CatalogApi;
use log::{error, trace};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::common::messages::AppMessage;
use crate::domains::session::UserCache;
use crate::state::{self, AppState};

/// Drives the application core over a tokio runtime.
///
/// Event handlers and network callbacks interleave cooperatively: every
/// dispatched message runs its update to completion before the next one
/// is taken, so domains never observe each other mid-mutation.
pub struct AppRuntime {
    state: AppState,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: mpsc::UnboundedReceiver<AppMessage>,
    tasks: JoinSet<AppMessage>,
}

impl std::fmt::Debug for AppRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRuntime")
            .field("state", &self.state)
            .field("pending_tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl AppRuntime {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_state(AppState::new(api))
    }

    pub fn with_user_cache(
        api: Arc<dyn CatalogApi>,
        user_cache: Arc<dyn UserCache>,
    ) -> Self {
        Self::with_state(AppState::with_user_cache(api, user_cache))
    }

    fn with_state(state: AppState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            tx,
            rx,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A handle for feeding messages in from outside the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.tx.clone()
    }

    /// Run one update synchronously, spawning whatever work it returns.
    pub fn dispatch(&mut self, message: AppMessage) {
        trace!("dispatch {}", message.name());
        let result = state::update(&mut self.state, message);
        self.spawn(result.task);
        for event in result.events {
            trace!("event {event:?}");
            let task = state::handle_event(&mut self.state, &event);
            self.spawn(task);
        }
    }

    fn spawn(&mut self, task: crate::common::task::Task<AppMessage>) {
        for future in task.into_futures() {
            self.tasks.spawn(future);
        }
    }

    /// Wait for exactly one spawned task to settle and dispatch its
    /// message. Returns false when nothing is pending. Tests use this to
    /// interleave dispatches with task completions deterministically.
    pub async fn step(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(message)) => {
                self.dispatch(message);
                true
            }
            Some(Err(join_error)) => {
                error!("background task failed: {join_error}");
                true
            }
            None => false,
        }
    }

    /// Drain queued messages and spawned tasks until nothing is left.
    pub async fn run_until_idle(&mut self) {
        loop {
            while let Ok(message) = self.rx.try_recv() {
                self.dispatch(message);
            }
            if !self.step().await && self.rx.is_empty() {
                break;
            }
        }
    }
}
