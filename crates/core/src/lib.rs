//! Core rules engine - pure, deterministic, and testable
//!
//! This crate owns the play field, the active piece, gravity ticks, collision, line
//! clears and scoring. It has **no dependencies** on rendering, input, timers or I/O:
//! a host calls [`GameEngine::tick`] on a periodic timer and the movement methods on
//! user input, then reads colors and counters back to draw.
//!
//! - **Deterministic**: the engine owns its generator, so the same seed replays the same game
//! - **Single-threaded**: every call runs to completion; hosts serialize access
//! - **Allocation-free**: fixed-size field, pieces and event buffers
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 grid of settled cells, collision checks, row collapse and line removal
//! - [`shape`]: 4x4 piece grids, templates and rotation with re-anchoring
//! - [`rng`]: seeded LCG plus the shape and color bag pickers
//! - [`scoring`]: line-clear points and the advisory level
//! - [`engine`]: the tick-driven state machine tying everything together
//! - [`snapshot`]: serializable render view
//!
//! # Game Rules
//!
//! - **Gravity**: pieces fall one row on every second tick
//! - **Rotation**: clockwise only, one attempt, reverted when blocked (no wall kicks)
//! - **Line clears**: full rows are zeroed when a piece locks and collapse on the next tick
//! - **Scoring**: `5n` plus a multi-line bonus per clear, and 1 point per settled piece
//! - **Game over**: a freshly spawned piece overlaps the stack; further input is ignored
//!
//! # Example
//!
//! ```
//! use plaintris_core::{GameEngine, PieceState};
//! use plaintris_core::types::GameEvent;
//!
//! let mut game = GameEngine::with_seed(12345);
//! assert!(matches!(game.state(), PieceState::Falling(_)));
//!
//! game.move_left();
//! game.rotate_right();
//!
//! // Run until the first piece settles.
//! let mut locked = false;
//! while !locked {
//!     locked = game
//!         .tick()
//!         .iter()
//!         .any(|e| matches!(e, GameEvent::PieceLocked { .. }));
//! }
//! assert_eq!(game.score(), 1);
//! ```

pub mod engine;
pub mod field;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use plaintris_types as types;

// Re-export commonly used types for convenience
pub use engine::{Events, GameEngine, PieceState};
pub use field::Field;
pub use rng::{ColorPicker, ShapePicker, SimpleRng};
pub use scoring::{level_for_lines, line_clear_score};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
