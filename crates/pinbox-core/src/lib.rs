//! Pinbox Core Types and Definitions
//!
//! This crate provides the foundational types used to lay out and draw
//! schematic symbols. It includes:
//!
//! - **Colors**: CSS color parsing ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke definitions and text measurement ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
