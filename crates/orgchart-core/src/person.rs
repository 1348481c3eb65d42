//! The input record of an organization chart.
//!
//! A chart is supplied as a single [`RawNode`]: one person together with the
//! people reporting to them, nested arbitrarily deep. The JSON shape is
//!
//! ```json
//! {
//!   "name": "Harry",
//!   "title": "Employer",
//!   "email": "email@test.com",
//!   "value": 15,
//!   "children": [ { "name": "Ron", "title": "Employer", "email": "email@test.com", "value": 10 } ]
//! }
//! ```
//!
//! `children` may be omitted or empty for a leaf.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while reading a chart document
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("chart document has no root node")]
    MissingRoot,

    #[error("malformed chart document: {0}")]
    Json(#[from] serde_json::Error),
}

/// One person in the chart, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawNode {
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    value: f64,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl RawNode {
    /// Creates a leaf record
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Appends a direct report (builder style)
    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces all direct reports (builder style)
    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Parses a chart document.
    ///
    /// A document consisting of `null` has no root and is rejected with
    /// [`ReadError::MissingRoot`].
    ///
    /// The JSON reader keeps its nesting limit of 128 containers. Each level
    /// of reports costs an object and a `children` array, so documents nest
    /// at most 64 people deep; deeper documents fail with [`ReadError::Json`].
    /// Deeper charts can still be built in memory with [`RawNode::with_child`].
    ///
    /// # Examples
    ///
    /// ```
    /// use orgchart_core::person::{RawNode, ReadError};
    ///
    /// let root = RawNode::from_json_str(r#"{"name": "Harry", "value": 15}"#).unwrap();
    /// assert_eq!(root.name(), "Harry");
    /// assert!(root.children().is_empty());
    ///
    /// assert!(matches!(RawNode::from_json_str("null"), Err(ReadError::MissingRoot)));
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, ReadError> {
        let root: Option<RawNode> = serde_json::from_str(source)?;
        let root = root.ok_or(ReadError::MissingRoot)?;
        debug!(root = root.name, nodes = root.count(); "Chart document read");
        Ok(root)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Numeric weight attached to the person
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Direct reports, in the order they were supplied
    pub fn children(&self) -> &[RawNode] {
        &self.children
    }

    /// Number of records in this subtree, including `self`
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
