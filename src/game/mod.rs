//! The game simulation engine.
//!
//! Everything in here is pure state manipulation with no I/O: the grid and
//! its toroidal addressing, the entity model, spawning, snake motion and
//! collision resolution, and enemy pursuit. The terminal loop in
//! [`crate::modes`] drives it one tick at a time.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod pursuit;
pub mod spawner;
pub mod state;

pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{CollisionKind, GameEngine, StepInfo, StepResult};
pub use grid::{Cell, Grid};
pub use spawner::Spawner;
pub use state::{GameState, Position, Snake};
