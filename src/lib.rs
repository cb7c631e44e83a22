//! NeonFolio - a single-window desktop portfolio.
//!
//! The `app` module holds the state machines (theme, active-section tracker,
//! typewriter, contact form) and external integrations; the `ui` module builds
//! and repaints the FLTK widget tree. The binary wires the two together with a
//! message channel and a dispatch loop.

pub mod app;
pub mod ui;
