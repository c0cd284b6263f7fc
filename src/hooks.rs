// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hook point the logger consults before every emission.
//!
//! Before writing anything, the logger triggers the `("debug", "log")` hook with a
//! [`LogEvent`] and a default value of `true`. Handlers can observe the event (for
//! example to forward it to a system log) and can veto the default write by returning
//! `false`.
//!
//! [`HookTrigger`] is the seam the logger depends on. [`HookRegistry`] is a small
//! in-process implementation: handlers are registered per `(name, kind)` pair and run in
//! priority order, each one seeing the value produced by the handlers before it.
//!
//! # Example
//!
//! ```rust
//! use hooklog::hooks::{HookRegistry, HookTrigger, LogEvent};
//! use hooklog::Level;
//!
//! let hooks = HookRegistry::new();
//! hooks.register("debug", "log", 500, |call| {
//!     // Keep notices out of the log entirely.
//!     (call.params.level == Level::Notice).then_some(false)
//! });
//!
//! let notice = LogEvent::new(Level::Notice, "NOTICE: hi", false);
//! let error = LogEvent::new(Level::Error, "ERROR: oops", false);
//! assert!(!hooks.trigger("debug", "log", &notice, true));
//! assert!(hooks.trigger("debug", "log", &error, true));
//! ```

use crate::level::Level;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Matches any hook name or kind when used at registration time.
pub const WILDCARD: &str = "all";

/// Parameters passed to the `("debug", "log")` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
    pub level: Level,
    pub msg: &'a str,
    pub display: bool,
    /// Same as `display`; kept for handlers written against the older parameter name.
    pub to_screen: bool,
}

impl<'a> LogEvent<'a> {
    pub fn new(level: Level, msg: &'a str, display: bool) -> Self {
        Self {
            level,
            msg,
            display,
            to_screen: display,
        }
    }
}

/**
A hook bus the logger can trigger.

`trigger` runs whatever is registered for `(name, kind)` and returns the aggregated
result, starting from `default`. The logger treats `false` as a veto.
*/
pub trait HookTrigger: Debug + Send + Sync {
    fn trigger(&self, name: &str, kind: &str, params: &LogEvent<'_>, default: bool) -> bool;
}

/// What a handler sees when it runs.
#[derive(Debug, Clone, Copy)]
pub struct HookCall<'a, 'e> {
    pub name: &'a str,
    pub kind: &'a str,
    pub params: &'a LogEvent<'e>,
    /// The value produced by the handlers that ran before this one.
    pub value: bool,
}

/// Identifies a registered handler so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Arc<dyn Fn(&HookCall<'_, '_>) -> Option<bool> + Send + Sync>;

struct Registration {
    id: HandlerId,
    name: String,
    kind: String,
    priority: i32,
    handler: Handler,
}

impl Registration {
    fn matches(&self, name: &str, kind: &str) -> bool {
        (self.name == name || self.name == WILDCARD) && (self.kind == kind || self.kind == WILDCARD)
    }
}

impl Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/**
An in-process hook registry.

Handlers run in ascending priority order; handlers with equal priority run in
registration order. A handler returning `Some(v)` replaces the running value, `None`
leaves it unchanged. Registering under [`WILDCARD`] matches every name or kind.

Matching handlers are snapshotted before any of them runs, so a handler may trigger
other hooks, or register and unregister handlers, on the same registry. Changes made
while a trigger is in flight take effect from the next trigger.
*/
#[derive(Debug, Default)]
pub struct HookRegistry {
    handlers: Mutex<Vec<Registration>>,
    next_id: AtomicU64,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, name: &str, kind: &str, priority: i32, handler: F) -> HandlerId
    where
        F: Fn(&HookCall<'_, '_>) -> Option<bool> + Send + Sync + 'static,
    {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        handlers.push(Registration {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            priority,
            handler: Arc::new(handler),
        });
        // stable sort keeps registration order within a priority
        handlers.sort_by_key(|registration| registration.priority);
        id
    }

    /// Removes a handler. Returns whether it was registered.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|registration| registration.id != id);
        handlers.len() != before
    }

    /// Whether anything would run for `(name, kind)`.
    pub fn has_handler(&self, name: &str, kind: &str) -> bool {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|registration| registration.matches(name, kind))
    }

    pub fn clear(&self) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl HookTrigger for HookRegistry {
    fn trigger(&self, name: &str, kind: &str, params: &LogEvent<'_>, default: bool) -> bool {
        let matching: Vec<Handler> = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.matches(name, kind))
            .map(|r| r.handler.clone())
            .collect();
        let mut value = default;
        for handler in matching {
            let call = HookCall {
                name,
                kind,
                params,
                value,
            };
            if let Some(next) = handler(&call) {
                value = next;
            }
        }
        value
    }
}
