//! Terminal snake with a hunting enemy and score-gated wrap-around movement.
//!
//! The simulation lives in [`game`] and is free of I/O; [`render`], [`input`]
//! and [`metrics`] are thin adapters around ratatui, crossterm and the
//! high-score file; [`modes`] ties them together in the tick loop.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
