// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod content;
pub mod document;
pub mod outline;

pub use content::*;
pub use document::*;
pub use outline::*;
