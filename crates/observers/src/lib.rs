//! Reusable observers for the Tangent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the equation solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEstimate`], [`HasDelta`], [`CanStopEarly`])
//! - [`table`]: [`TraceTable`], which records one row per iteration and
//!   renders the rows as a fixed-width text table
//! - [`log`]: [`LogObserver`], which forwards iterations to `tracing`
//!
//! # Features
//!
//! - `plot`: Enables [`ConvergencePlot`] for comparing solver convergence via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: tangent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasDelta`]: traits::HasDelta
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`TraceTable`]: table::TraceTable
//! [`LogObserver`]: log::LogObserver

pub mod log;
pub mod table;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{ConvergencePlot, RunObserver};
