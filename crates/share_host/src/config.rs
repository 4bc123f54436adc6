//! Names the share adapter reads from and publishes to.

use serde::{Deserialize, Serialize};

use crate::error::ShareError;

/// Body class added when the host exposes a native share capability.
pub const DEFAULT_MARKER_CLASS: &str = "feature-native-share";
/// Global namespace object the share handle is published under.
pub const DEFAULT_NAMESPACE: &str = "mvp";
/// Member name of the share handle inside the namespace object.
pub const DEFAULT_NAMESPACE_MEMBER: &str = "share";
/// Selector for the canonical-link element.
pub const DEFAULT_CANONICAL_SELECTOR: &str = "link[rel=canonical]";
/// `name` of the meta tag that overrides the document title.
pub const DEFAULT_TITLE_META: &str = "title";
/// `name` of the meta tag that supplies the share text.
pub const DEFAULT_DESCRIPTION_META: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Element, class, and namespace names used by [`crate::ShareAdapter`].
///
/// Missing fields in a serialized config fall back to the defaults above, so pages can override
/// a single name without restating the rest.
pub struct ShareConfig {
    /// Class added to `document.body` when sharing is available.
    pub marker_class: String,
    /// Global namespace object name.
    pub namespace: String,
    /// Member name for the share callable.
    pub member: String,
    /// CSS selector resolving the canonical-link element.
    pub canonical_selector: String,
    /// Meta tag name holding the title override.
    pub title_meta: String,
    /// Meta tag name holding the description.
    pub description_meta: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            member: DEFAULT_NAMESPACE_MEMBER.to_string(),
            canonical_selector: DEFAULT_CANONICAL_SELECTOR.to_string(),
            title_meta: DEFAULT_TITLE_META.to_string(),
            description_meta: DEFAULT_DESCRIPTION_META.to_string(),
        }
    }
}

impl ShareConfig {
    /// Parses a config from a JSON object, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::Config`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ShareError> {
        serde_json::from_str(raw).map_err(|e| ShareError::Config(e.to_string()))
    }
}
