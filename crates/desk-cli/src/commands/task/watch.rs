use std::time::Duration;

use chrono::{DateTime, Utc};
use desk_client::poll::{FeedState, PollingFeed, Source, TaskFeed, TaskListSource, TaskSource};
use serde::Serialize;
use tokio::sync::watch;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One refresh as printed to stdout.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct WatchEvent<T> {
    fetches: u64,
    updated_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
    value: Option<T>,
}

impl<T: Clone> From<&FeedState<T>> for WatchEvent<T> {
    fn from(state: &FeedState<T>) -> Self {
        Self {
            fetches: state.fetches,
            updated_at: state.updated_at,
            last_error: state.last_error.clone(),
            value: state.value.clone(),
        }
    }
}

pub async fn run(
    id: Option<&str>,
    mine: bool,
    interval: Option<u64>,
    count: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    let every = interval.map_or_else(|| ctx.config.poll.interval(), Duration::from_secs);
    let client = ctx.client.clone();

    match id {
        Some(id) => {
            let source = TaskSource::new(client, id.to_string());
            follow(source, every, count, |event| output(event, flags.format)).await
        }
        None => {
            let assigned_to = if mine {
                Some(super::own_user_id(ctx)?)
            } else {
                None
            };
            let source = TaskListSource::new(client, assigned_to);
            follow(source, every, count, |event| output(event, flags.format)).await
        }
    }
}

async fn follow<S, F>(source: S, every: Duration, count: Option<u32>, emit: F) -> anyhow::Result<()>
where
    S: Source,
    S::Item: Serialize,
    F: FnMut(&WatchEvent<S::Item>) -> anyhow::Result<()>,
{
    tracing::info!(source = %source.describe(), interval = ?every, "watching");
    let feed = PollingFeed::start(source, every);
    let result = watch_feed(feed.subscribe(), count, emit).await;
    feed.stop();
    result
}

/// Emit an event per feed change until `count` events were shown, the feed
/// closes, or the user presses Ctrl-C.
async fn watch_feed<T, F>(
    mut rx: watch::Receiver<FeedState<T>>,
    count: Option<u32>,
    mut emit: F,
) -> anyhow::Result<()>
where
    T: Clone,
    F: FnMut(&WatchEvent<T>) -> anyhow::Result<()>,
{
    let mut shown = 0_u32;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if count.is_some_and(|limit| shown >= limit) {
            return Ok(());
        }
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let event = WatchEvent::from(&*rx.borrow_and_update());
                emit(&event)?;
                shown += 1;
            }
            _ = &mut ctrl_c => {
                tracing::debug!(shown, "watch interrupted");
                return Ok(());
            }
        }
    }
}
