//! Utility modules for dashboard rendering.

pub mod chart;
pub mod html;
pub mod lookup_tables;
