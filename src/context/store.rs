// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::{type_name, Any};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::ContextError;
use crate::observability::messages::context::{ContextTornDown, ValueReplaced};
use crate::observability::messages::StructuredLog;

/// A type-erased value together with the name of the type it was stored as.
///
/// Dropping the box runs the drop glue captured when the value was inserted,
/// which is the value's release routine.
struct StoredValue {
    payload: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StoredValue {
    fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            payload: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    fn downcast_ref<T: 'static>(&self, key: &str) -> Result<&T, ContextError> {
        self.payload
            .downcast_ref::<T>()
            .ok_or_else(|| ContextError::TypeMismatch {
                key: key.to_string(),
                stored: self.type_name,
                requested: type_name::<T>(),
            })
    }

    fn release(self) {
        drop(self.payload);
    }
}

#[derive(Default)]
struct Slots {
    entries: HashMap<String, StoredValue>,
    torn_down: bool,
}

impl Slots {
    fn ensure_open(&self) -> Result<(), ContextError> {
        if self.torn_down {
            Err(ContextError::TornDown)
        } else {
            Ok(())
        }
    }
}

/// Thread-safe, type-erased key/value store shared by the nodes of a flow.
///
/// Every operation is one critical section under a single lock covering the
/// whole map. There is no compound read-modify-write operation; callers that
/// need one must synchronize externally.
///
/// Values displaced by `set` or drained by `teardown` are released after the
/// lock is dropped, so a value's `Drop` may itself use the context.
///
/// # Examples
///
/// ```
/// use nodeflow::context::Context;
/// use nodeflow::errors::ContextError;
///
/// let ctx = Context::new().with_value("topic", String::from("rust"));
/// assert_eq!(ctx.get::<String>("topic").unwrap(), Some("rust".to_string()));
/// assert_eq!(ctx.get::<String>("missing").unwrap(), None);
/// assert!(matches!(
///     ctx.get::<u32>("topic"),
///     Err(ContextError::TypeMismatch { .. })
/// ));
/// ```
#[derive(Default)]
pub struct Context {
    inner: Mutex<Slots>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh context, builder style.
    pub fn with_value<T: Send + Sync + 'static>(mut self, key: impl Into<String>, value: T) -> Self {
        let slots = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        slots.entries.insert(key.into(), StoredValue::new(value));
        self
    }

    // The only caller code that runs under the lock is a `with` closure,
    // which gets a shared borrow and cannot leave the map half-written. A
    // panic there must not close the store, so poisoning is ignored.
    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move `value` into the store under `key`.
    ///
    /// A value already stored under `key` is released exactly once before
    /// this returns.
    pub fn set<T: Send + Sync + 'static>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<(), ContextError> {
        let displaced = {
            let mut slots = self.slots();
            slots.ensure_open()?;
            match slots.entries.entry(key.into()) {
                Entry::Occupied(mut slot) => {
                    let previous = slot.insert(StoredValue::new(value));
                    ValueReplaced {
                        key: slot.key(),
                        previous_type: previous.type_name,
                    }
                    .log();
                    Some(previous)
                }
                Entry::Vacant(slot) => {
                    slot.insert(StoredValue::new(value));
                    None
                }
            }
        };

        if let Some(previous) = displaced {
            previous.release();
        }
        Ok(())
    }

    /// Clone the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent and
    /// [`ContextError::TypeMismatch`] when it holds a different type.
    pub fn get<T: Clone + 'static>(&self, key: &str) -> Result<Option<T>, ContextError> {
        self.with(key, T::clone)
    }

    /// Borrow the value stored under `key` for the duration of `f`.
    ///
    /// The store lock is held while `f` runs, so `f` must not call back into
    /// this context.
    pub fn with<T: 'static, R>(
        &self,
        key: &str,
        f: impl FnOnce(&T) -> R,
    ) -> Result<Option<R>, ContextError> {
        let slots = self.slots();
        slots.ensure_open()?;
        slots
            .entries
            .get(key)
            .map(|stored| stored.downcast_ref::<T>(key).map(f))
            .transpose()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted snapshot of the stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots().entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Release every stored value and close the context.
    ///
    /// Returns how many values were released. Only the first call releases
    /// anything; later calls return 0. After teardown every read and write
    /// fails with [`ContextError::TornDown`].
    pub fn teardown(&self) -> usize {
        let drained: Vec<StoredValue> = {
            let mut slots = self.slots();
            if slots.torn_down {
                return 0;
            }
            slots.torn_down = true;
            slots.entries.drain().map(|(_, stored)| stored).collect()
        };

        let released = drained.len();
        drained.into_iter().for_each(StoredValue::release);
        ContextTornDown { released }.log();
        released
    }

    pub fn is_torn_down(&self) -> bool {
        self.slots().torn_down
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots();
        let mut entries: Vec<(&str, &str)> = slots
            .entries
            .iter()
            .map(|(key, stored)| (key.as_str(), stored.type_name))
            .collect();
        entries.sort();
        f.debug_struct("Context")
            .field("entries", &entries)
            .field("torn_down", &slots.torn_down)
            .finish()
    }
}
