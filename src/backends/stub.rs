// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test nodes for exercising the engine without real work.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::context::Context;
use crate::errors::{NodeError, Stage};
use crate::traits::Node;

/// Shared record of node names in activation order.
pub type Trail = Arc<Mutex<Vec<String>>>;

pub fn trail() -> Trail {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn trail_entries(trail: &Trail) -> Vec<String> {
    trail.lock().unwrap().clone()
}

/// Returns a fixed action label, marks `ran:<name>` in the context and
/// optionally appends its name to a trail.
pub struct LabelNode {
    pub name: String,
    pub action: String,
    trail: Option<Trail>,
}

impl LabelNode {
    pub fn new(name: &str, action: &str) -> Self {
        Self {
            name: name.to_string(),
            action: action.to_string(),
            trail: None,
        }
    }

    pub fn with_trail(name: &str, action: &str, trail: &Trail) -> Self {
        Self {
            trail: Some(Arc::clone(trail)),
            ..Self::new(name, action)
        }
    }
}

#[async_trait]
impl Node for LabelNode {
    type Prep = ();
    type Exec = ();

    fn name(&self) -> &str {
        &self.name
    }

    fn prep(&self, _ctx: &Context) -> Result<(), NodeError> {
        Ok(())
    }

    async fn exec(&self, _prep: &()) -> Result<(), NodeError> {
        if let Some(trail) = &self.trail {
            trail.lock().unwrap().push(self.name.clone());
        }
        Ok(())
    }

    fn post(&self, ctx: &Context, _prep: &(), _exec: &()) -> Result<String, NodeError> {
        ctx.set(format!("ran:{}", self.name), true)?;
        Ok(self.action.clone())
    }
}

/// Call and release counters for a [`ProbeNode`].
#[derive(Default)]
pub struct Probe {
    pub exec_calls: AtomicUsize,
    pub post_calls: AtomicUsize,
    pub prep_released: AtomicUsize,
    pub exec_released: AtomicUsize,
}

impl Probe {
    pub fn read(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Optionally fails at one stage or stalls in `exec`, and counts every stage
/// call and release.
pub struct ProbeNode {
    pub name: String,
    pub fail_at: Option<Stage>,
    pub exec_delay: Option<Duration>,
    pub action: String,
    pub probe: Arc<Probe>,
}

impl ProbeNode {
    pub fn succeeding(name: &str, action: &str) -> Self {
        Self {
            name: name.to_string(),
            fail_at: None,
            exec_delay: None,
            action: action.to_string(),
            probe: Arc::new(Probe::default()),
        }
    }

    pub fn failing_at(name: &str, stage: Stage) -> Self {
        Self {
            fail_at: Some(stage),
            ..Self::succeeding(name, "x")
        }
    }

    /// Sleeps for `delay` inside `exec`, long enough to be cancelled.
    pub fn stalling(name: &str, delay: Duration) -> Self {
        Self {
            exec_delay: Some(delay),
            ..Self::succeeding(name, "x")
        }
    }

    fn check(&self, stage: Stage) -> Result<(), NodeError> {
        if self.fail_at == Some(stage) {
            Err(NodeError::invalid(format!("{} refused to {}", self.name, stage)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Node for ProbeNode {
    type Prep = String;
    type Exec = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn prep(&self, _ctx: &Context) -> Result<String, NodeError> {
        self.check(Stage::Prep)?;
        Ok(format!("{}:prep", self.name))
    }

    async fn exec(&self, prep: &String) -> Result<String, NodeError> {
        self.probe.exec_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.exec_delay {
            tokio::time::sleep(delay).await;
        }
        self.check(Stage::Exec)?;
        Ok(format!("{}:exec", prep))
    }

    fn post(&self, ctx: &Context, _prep: &String, exec: &String) -> Result<String, NodeError> {
        self.probe.post_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Stage::Post)?;
        ctx.set(format!("{}:result", self.name), exec.clone())?;
        Ok(self.action.clone())
    }

    fn release_prep(&self, _prep: String) {
        self.probe.prep_released.fetch_add(1, Ordering::SeqCst);
    }

    fn release_exec(&self, _exec: String) {
        self.probe.exec_released.fetch_add(1, Ordering::SeqCst);
    }
}
