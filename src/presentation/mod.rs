//! Presentation layer for visual styling.
//!
//! Colour lookups and text styling, kept apart from the table logic.

pub mod color_mapping;
