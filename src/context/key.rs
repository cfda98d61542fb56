// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::marker::PhantomData;

use super::Context;
use crate::errors::ContextError;

/// A context key bound to the type of value stored under it.
///
/// Reading and writing through the same `ContextKey<T>` can never disagree
/// on the value's type. A plain string `set` under the same name with a
/// different type is still caught at read time as a type mismatch.
///
/// ```
/// use nodeflow::context::{Context, ContextKey};
///
/// const OUTLINE: ContextKey<Vec<String>> = ContextKey::new("outline");
///
/// let ctx = Context::new();
/// ctx.put(&OUTLINE, vec!["Intro".to_string()]).unwrap();
/// assert_eq!(ctx.fetch(&OUTLINE).unwrap(), Some(vec!["Intro".to_string()]));
/// ```
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ContextKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContextKey<T> {}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextKey")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl Context {
    /// Typed `set`.
    pub fn put<T: Send + Sync + 'static>(
        &self,
        key: &ContextKey<T>,
        value: T,
    ) -> Result<(), ContextError> {
        self.set(key.name, value)
    }

    /// Typed `get`.
    pub fn fetch<T: Clone + 'static>(&self, key: &ContextKey<T>) -> Result<Option<T>, ContextError> {
        self.get(key.name)
    }

    /// Typed `with`.
    pub fn fetch_with<T: 'static, R>(
        &self,
        key: &ContextKey<T>,
        f: impl FnOnce(&T) -> R,
    ) -> Result<Option<R>, ContextError> {
        self.with(key.name, f)
    }
}
