// SPDX-License-Identifier: MIT OR Apache-2.0

//! Execution context tags.
//!
//! Hosts keep a stack of tags describing what the current request is doing: rendering a
//! page, generating a script (`"js"`), a stylesheet (`"css"`), and so on. The logger only
//! needs one question answered, whether a tag is anywhere on that stack, so it depends on
//! the [`ExecutionContext`] trait rather than on a concrete stack.
//!
//! [`ContextStack`] is the stack itself. It uses interior mutability so that the same
//! instance can be shared with the logger (through an `Arc`) while request handling code
//! pushes and pops tags.
//!
//! ```rust
//! use hooklog::context::{ContextStack, ExecutionContext};
//!
//! let context = ContextStack::new();
//! context.push("page");
//! context.push("js");
//! assert!(context.contains("js"));
//! assert_eq!(context.peek().as_deref(), Some("js"));
//!
//! assert_eq!(context.pop().as_deref(), Some("js"));
//! assert!(!context.contains("js"));
//! ```


use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

/// Answers whether a tag is part of the current execution context.
pub trait ExecutionContext: Debug + Send + Sync {
    fn contains(&self, tag: &str) -> bool;
}

/// A shared stack of context tags.
#[derive(Debug, Default)]
pub struct ContextStack {
    stack: Mutex<Vec<String>>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, tag: impl Into<String>) {
        self.with_stack(|stack| stack.push(tag.into()));
    }

    /// Removes and returns the innermost tag.
    pub fn pop(&self) -> Option<String> {
        self.with_stack(Vec::pop)
    }

    /// The innermost tag.
    pub fn peek(&self) -> Option<String> {
        self.with_stack(|stack| stack.last().cloned())
    }

    /// Replaces the innermost tag, or pushes one onto an empty stack.
    pub fn set(&self, tag: impl Into<String>) {
        let tag = tag.into();
        self.with_stack(|stack| match stack.last_mut() {
            Some(top) => *top = tag,
            None => stack.push(tag),
        });
    }

    pub fn depth(&self) -> usize {
        self.with_stack(|stack| stack.len())
    }

    pub fn clear(&self) {
        self.with_stack(Vec::clear);
    }

    /// A copy of the stack, outermost tag first.
    pub fn to_vec(&self) -> Vec<String> {
        self.with_stack(|stack| stack.clone())
    }

    fn with_stack<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<String>) -> R,
    {
        let mut stack = self.stack.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *stack)
    }
}

impl ExecutionContext for ContextStack {
    fn contains(&self, tag: &str) -> bool {
        self.with_stack(|stack| stack.iter().any(|t| t == tag))
    }
}
