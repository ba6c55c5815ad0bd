//! Pointer-reactive grid field for the portfolio backdrop.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! full-viewport grid whose lines bow upward around a lagged cursor, scroll
//! with parallax, and fade in after a delayed intro once the page has been
//! scrolled. The host JavaScript layer only mounts a `<canvas>`, forwards its
//! `isVisible` signal, and unmounts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Mount/unmount driver and the testable [`engine::RendererCore`] |
//! | [`pointer`] | Raw pointer samples and the smoothed cursor |
//! | [`field`] | Radial, vertical-only distortion around the cursor |
//! | [`grid`] | Per-frame line geometry with parallax and perimeter lines |
//! | [`scheduler`] | Per-tick gating: invisible skip and frame throttle |
//! | [`visibility`] | Intro state machine and scroll fade |
//! | [`host`] | Event-loop seam (listeners, frames, timers) |
//! | [`surface`] | Drawing seam |
//! | [`render`] | Canvas 2D implementation of the drawing seam |
//! | [`web`] | Browser host and the exported `GridField` |
//! | [`config`] | Tunable design values |
//! | [`geometry`] | Points and viewport size |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (spacing, radius, thresholds, etc.) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod pointer;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod visibility;
pub mod web;
