//! Utility modules for the logiview dashboard.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, format_thousands, format_weight_kg, get_current_memory_mb};
