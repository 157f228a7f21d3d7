//! # calgrid
//!
//! Season schedule densification and calendar grid layout engine.
//!
//! This crate turns a sparse list of scheduled events (a sports season:
//! game dates, opponents, optional start times) into a dense, gap-free
//! day-by-day season record, then computes where each day should be drawn
//! on a multi-month grid layout. The output is a serialisable render plan
//! that an external renderer can draw without consulting any other state;
//! the core never issues drawing calls and never opens files.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Typed records for raw events and densified days
//! - [`parsing`]: Parsers for schedule CSV exports and the date/time formats they use
//! - [`services`]: Densification, time formatting, grid layout and render-plan assembly
//! - [`config`]: Resolved, immutable calendar configuration
//!
//! ## Pipeline
//!
//! Raw events plus configuration flow through [`services::densify`] into a
//! [`models::Season`], which [`services::layout_season`] maps to per-day
//! cell coordinates and [`services::build_render_plan`] packages for the
//! renderer. All stages are pure, synchronous functions of their inputs.

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::{CalendarConfig, ConfigOverlay, HourFormat};
pub use error::{CalendarError, Result};
