//! Bookkeeping for notifications that are still on screen.
//!
//! A backend that has to keep OS objects (and the callbacks attached to them)
//! alive after submission parks them here. An entry leaves the registry on the
//! first lifecycle event, on an explicit `take`, or once it outlives the TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::request::NotificationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalReason {
    UserCanceled,
    ApplicationHidden,
    TimedOut,
    Unknown(i32),
}

impl DismissalReason {
    /// Maps the raw `ToastDismissalReason` value.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => DismissalReason::UserCanceled,
            1 => DismissalReason::ApplicationHidden,
            2 => DismissalReason::TimedOut,
            other => DismissalReason::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Activated,
    ActionActivated(u32),
    Dismissed(DismissalReason),
    Failed(String),
}

impl ToastEvent {
    /// Activation arguments carry the action index when a button was pressed
    /// and are empty for a click on the body.
    pub fn from_activation_arguments(arguments: &str) -> Self {
        match arguments.trim().parse::<u32>() {
            Ok(index) => ToastEvent::ActionActivated(index),
            Err(_) => ToastEvent::Activated,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToastEvent::Activated => "activated",
            ToastEvent::ActionActivated(_) => "action_activated",
            ToastEvent::Dismissed(_) => "dismissed",
            ToastEvent::Failed(_) => "failed",
        }
    }
}

struct Tracked<T> {
    handle: T,
    registered: Instant,
}

pub struct HandlerRegistry<T> {
    live: Mutex<HashMap<NotificationId, Tracked<T>>>,
    ttl: Duration,
}

impl<T> HandlerRegistry<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            live: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn track(&self, id: NotificationId, handle: T) {
        self.prune_expired();
        self.live.lock().insert(
            id,
            Tracked {
                handle,
                registered: Instant::now(),
            },
        );
    }

    /// Releases the entry for `id` in response to an OS callback.
    pub fn complete(&self, id: NotificationId, event: &ToastEvent) -> Option<T> {
        let released = self.take(id);
        tracing::debug!(
            %id,
            event = event.name(),
            released = released.is_some(),
            "notification lifecycle event"
        );
        released
    }

    pub fn take(&self, id: NotificationId) -> Option<T> {
        self.live.lock().remove(&id).map(|t| t.handle)
    }

    /// Drops entries the OS never called back about. Returns how many went.
    pub fn prune_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut live = self.live.lock();
        let before = live.len();
        live.retain(|_, tracked| tracked.registered.elapsed() < ttl);
        let pruned = before - live.len();
        if pruned > 0 {
            tracing::debug!(pruned, "released expired notification handlers");
        }
        pruned
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.live.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
