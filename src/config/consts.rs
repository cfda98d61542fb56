// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Placeholder replaced by the topic in outline section templates
pub const TOPIC_PLACEHOLDER: &str = "{topic}";
/// Placeholder replaced by the section heading in the content template
pub const ITEM_PLACEHOLDER: &str = "{item}";

/// Topic used when neither config nor command line provides one
pub const DEFAULT_TOPIC: &str = "ownership in Rust";
/// Section heading templates for the outline node
pub const DEFAULT_SECTIONS: [&str; 3] = [
    "Introduction to {topic}",
    "Core ideas of {topic}",
    "Applying {topic} in practice",
];
/// Paragraph template for the content node
pub const DEFAULT_CONTENT_TEMPLATE: &str = "This section covers {item}.";
/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
