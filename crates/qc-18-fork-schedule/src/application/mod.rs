//! # Application Module
//!
//! The published, swappable fork schedule.

pub mod registry;

pub use registry::ScheduleRegistry;
