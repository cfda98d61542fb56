// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CONTENT_TEMPLATE, DEFAULT_LOG_FILTER, DEFAULT_SECTIONS, DEFAULT_TOPIC,
    ITEM_PLACEHOLDER,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the document pipeline binary.
///
/// Every section is optional; missing values fall back to `config::consts`.
///
/// # Example
/// ```yaml
/// logging:
///   filter: "nodeflow=debug"
/// pipeline:
///   topic: "async Rust"
///   sections:
///     - "What is {topic}?"
///     - "Pitfalls of {topic}"
///   content_template: "Notes on {item}."
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Tracing subscriber settings.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// What the outline, content and document nodes produce.
///
/// # Fields
/// * `topic` - Seed value stored under the `topic` context key
/// * `sections` - Outline heading templates, `{topic}` is substituted
/// * `content_template` - Paragraph template, `{item}` is substituted
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    #[serde(default = "default_content_template")]
    pub content_template: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            sections: default_sections(),
            content_template: default_content_template(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_sections() -> Vec<String> {
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_content_template() -> String {
    DEFAULT_CONTENT_TEMPLATE.to_string()
}

impl Config {
    /// Check the pipeline settings, collecting every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        let pipeline = &self.pipeline;

        if pipeline.topic.trim().is_empty() {
            problems.push("pipeline.topic must not be empty".to_string());
        }
        if pipeline.sections.is_empty() {
            problems.push("pipeline.sections must list at least one section".to_string());
        }
        for (i, section) in pipeline.sections.iter().enumerate() {
            if section.trim().is_empty() {
                problems.push(format!("pipeline.sections[{}] is empty", i));
            }
        }
        if !pipeline.content_template.contains(ITEM_PLACEHOLDER) {
            problems.push(format!(
                "pipeline.content_template must contain '{}'",
                ITEM_PLACEHOLDER
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a config from a YAML file and reject settings the pipeline cannot run with
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
