// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named logging channel that can be switched off independently of level.
///
/// Contexts are value objects: two contexts with the same key are equal no
/// matter what their `enabled` flag says. A call logged against a disabled
/// context is dropped before any destination sees it and before its message
/// closure runs.
///
/// # Example
/// ```
/// use loghive::model::Context;
///
/// let paypal = Context::custom("Paypal 💰", true);
/// let muted = paypal.clone().with_enabled(false);
///
/// assert_eq!(paypal, muted);
/// assert!(!muted.is_enabled());
/// ```
#[derive(Clone)]
pub struct Context {
    key: Arc<str>,
    enabled: bool,
}

impl Context {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self {
            key: key.into(),
            enabled: true,
        }
    }

    /// Ad-hoc context, typically one per feature module.
    pub fn custom(key: impl Into<Arc<str>>, enabled: bool) -> Self {
        Self::new(key).with_enabled(enabled)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn app() -> Self {
        Self::new("📱 App")
    }

    pub fn layout() -> Self {
        Self::new("🔲 View Layout")
    }

    pub fn routing() -> Self {
        Self::new("⛵️ Routing")
    }

    pub fn service() -> Self {
        Self::new("🌍 Service")
    }

    pub fn model() -> Self {
        Self::new("🏛 Model")
    }

    pub fn memory() -> Self {
        Self::new("✅ Memory deinit")
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::app()
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Context {}

impl Hash for Context {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("key", &self.key())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
