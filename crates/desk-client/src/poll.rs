//! Keeps a task, or a task list, fresh by re-fetching on a fixed interval.
//!
//! Consumers read through [`TaskFeed`], which hands out a `watch` receiver.
//! [`PollingFeed`] is the implementation used today; a push-based feed can
//! replace it behind the same trait.
//!
//! Polling rules:
//! - one fetch immediately on start, then one per interval tick
//! - each fetch runs in its own task, so a slow response never delays the
//!   schedule; overlapping fetches are allowed and the last one to land wins
//! - a failed fetch is logged and recorded in [`FeedState::last_error`]; the
//!   previous value is kept and the next tick fetches again
//! - stopping or dropping the feed cancels the schedule and in-flight fetches

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use desk_core::entities::Task;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::{ApiClient, error::ApiError};

/// Interval used when a caller passes zero.
const MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Something that can be fetched repeatedly.
pub trait Source: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    fn fetch(&self) -> impl Future<Output = Result<Self::Item, ApiError>> + Send;

    /// Short label for log lines.
    fn describe(&self) -> String;
}

/// Latest known value plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState<T> {
    /// `None` until the first successful fetch.
    pub value: Option<T>,
    /// Message from the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Completed fetches, successful or not.
    pub fetches: u64,
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self {
            value: None,
            last_error: None,
            updated_at: None,
            fetches: 0,
        }
    }
}

/// Read side of a live task view.
pub trait TaskFeed<T> {
    fn subscribe(&self) -> watch::Receiver<FeedState<T>>;

    /// Replace the current value with a server response, e.g. the task
    /// returned by a status change.
    fn publish(&self, value: T);
}

pub struct PollingFeed<T> {
    tx: Arc<watch::Sender<FeedState<T>>>,
    handle: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> PollingFeed<T> {
    /// Start polling `source`. Must be called inside a tokio runtime.
    pub fn start<S>(source: S, interval: Duration) -> Self
    where
        S: Source<Item = T>,
    {
        let interval = if interval.is_zero() {
            MIN_INTERVAL
        } else {
            interval
        };
        let (tx, _rx) = watch::channel(FeedState::default());
        let tx = Arc::new(tx);
        let handle = tokio::spawn(run(Arc::new(source), Arc::clone(&tx), interval));
        Self { tx, handle }
    }

    /// Cancel the schedule and any in-flight fetch.
    pub fn stop(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl<T: Clone + Send + Sync + 'static> TaskFeed<T> for PollingFeed<T> {
    fn subscribe(&self) -> watch::Receiver<FeedState<T>> {
        self.tx.subscribe()
    }

    fn publish(&self, value: T) {
        self.tx.send_modify(|state| {
            state.value = Some(value);
            state.last_error = None;
            state.updated_at = Some(Utc::now());
        });
    }
}

impl<T> Drop for PollingFeed<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run<S: Source>(source: Arc<S>, tx: Arc<watch::Sender<FeedState<S::Item>>>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // Dropping the set aborts in-flight fetches along with this task.
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let source = Arc::clone(&source);
                let tx = Arc::clone(&tx);
                in_flight.spawn(async move {
                    let result = source.fetch().await;
                    tx.send_modify(|state| {
                        state.fetches += 1;
                        match result {
                            Ok(value) => {
                                state.value = Some(value);
                                state.last_error = None;
                                state.updated_at = Some(Utc::now());
                            }
                            Err(error) => {
                                tracing::warn!(source = %source.describe(), %error, "poll fetch failed");
                                state.last_error = Some(error.to_string());
                            }
                        }
                    });
                });
            }
            Some(_) = in_flight.join_next() => {}
        }
    }
}

/// All tasks, or those assigned to one user (the sales dashboard).
#[derive(Debug, Clone)]
pub struct TaskListSource {
    client: ApiClient,
    assigned_to: Option<String>,
}

impl TaskListSource {
    #[must_use]
    pub const fn new(client: ApiClient, assigned_to: Option<String>) -> Self {
        Self {
            client,
            assigned_to,
        }
    }
}

impl Source for TaskListSource {
    type Item = Vec<Task>;

    async fn fetch(&self) -> Result<Vec<Task>, ApiError> {
        self.client.list_tasks(self.assigned_to.as_deref()).await
    }

    fn describe(&self) -> String {
        self.assigned_to
            .as_ref()
            .map_or_else(|| "tasks".to_string(), |user| format!("tasks for {user}"))
    }
}

/// One task, for the detail view.
#[derive(Debug, Clone)]
pub struct TaskSource {
    client: ApiClient,
    id: String,
}

impl TaskSource {
    #[must_use]
    pub const fn new(client: ApiClient, id: String) -> Self {
        Self { client, id }
    }
}

impl Source for TaskSource {
    type Item = Task;

    async fn fetch(&self) -> Result<Task, ApiError> {
        self.client.get_task(&self.id).await
    }

    fn describe(&self) -> String {
        format!("task {}", self.id)
    }
}
