//! Error types for chart operations.
//!
//! This module provides the main error type [`OrgChartError`] which wraps the
//! failure modes of building, laying out and drawing a chart.

use std::io;

use thiserror::Error;

use orgchart_core::{
    geometry::{Insets, Size},
    identifier::NodeId,
    person::ReadError,
};

/// The main error type for chart operations.
///
/// None of these are retriable: the same input fails the same way every time.
#[derive(Debug, Error)]
pub enum OrgChartError {
    /// The chart document is missing its root or holds an unusable record.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The canvas leaves no drawable area once the margins are removed.
    #[error(
        "Invalid layout bounds: canvas {}x{} leaves no room inside margins \
         (top {}, right {}, bottom {}, left {})",
        .canvas.width(), .canvas.height(),
        .margins.top(), .margins.right(), .margins.bottom(), .margins.left()
    )]
    InvalidLayoutBounds { canvas: Size, margins: Insets },

    /// A connector was requested for a node that has no parent.
    #[error("Missing parent: {0} is a root and has no connector")]
    MissingParent(NodeId),

    /// The drawing surface could not be set up, so nothing was drawn.
    #[error("Surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<ReadError> for OrgChartError {
    fn from(error: ReadError) -> Self {
        Self::InvalidInput(error.to_string())
    }
}

impl From<crate::export::Error> for OrgChartError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Io(err) => Self::Io(err),
            other => Self::Export(Box::new(other)),
        }
    }
}
