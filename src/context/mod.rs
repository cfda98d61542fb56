// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared key/value state that persists across node boundaries.
//!
//! A [`Context`] maps string keys to values of any `Send + Sync + 'static`
//! type. Values are moved in by `set`, so the store is their sole owner from
//! then on; reads either clone the value out or borrow it through a closure.
//! A read under the wrong type fails with
//! [`ContextError::TypeMismatch`](crate::errors::ContextError::TypeMismatch).
//!
//! [`ContextKey`] pairs a key name with its value type for callers that want
//! mismatched reads ruled out at compile time.

mod key;
mod store;

pub use key::ContextKey;
pub use store::Context;
