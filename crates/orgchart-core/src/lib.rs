//! Orgchart Core Types and Definitions
//!
//! This crate provides the foundational types shared by the chart engine and
//! its hosts:
//!
//! - **Input**: the nested person record a chart is built from ([`person::RawNode`])
//! - **Identifiers**: arena indices naming chart nodes ([`identifier::NodeId`])
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: basic geometric types ([`geometry`] module)
//! - **Draw**: drawable output of the engine ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod person;
