//! # Dayplan Core Library
//!
//! This library provides the core business logic for Dayplan, a single-user
//! day-plan registry. All operations are available to any caller (the
//! interactive CLI binary, a test harness) through the same library surface.
//!
//! ## Architecture
//!
//! - **Activity**: A named, prioritized, time-bounded plan entry with a
//!   completion flag
//! - **Registry**: The in-memory store that enforces the no-overlap invariant
//!   over all stored activities and reports every outcome through its sinks
//! - **Notifications**: A pluggable sink interface; the registry never calls
//!   out except through it
//!
//! ## Key Components
//!
//! - [`PlanRegistry`]: The conflict-checking scheduler
//! - [`Activity`]: Plan entry with `[start, end)` interval semantics
//! - [`NotificationSink`]: Trait for outcome rendering

pub mod activity;
pub mod error;
pub mod notify;
pub mod registry;

pub use activity::{parse_time, Activity, Priority};
pub use error::{PlanError, Result};
pub use notify::{ConsoleSink, MemorySink, NotificationSink};
pub use registry::PlanRegistry;
