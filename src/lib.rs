//! Rules engine for a single-player FreeCell game.
//!
//! The `game` module holds the pure rules: card and zone types, the
//! deterministic deal pipeline, and the `FreecellGame` state with its
//! validity predicates and snapshot-producing move operations. The `engine`
//! module is the layer a UI talks to: the command vocabulary, the
//! identity-based move entry point, the smart-move resolver, and
//! seed/difficulty selection. Rendering, drag capture, timers and undo
//! history live outside this crate; undo falls out of the snapshot model by
//! retaining prior `FreecellGame` values.

pub mod engine;
pub mod game;

pub use engine::commands::{execute_command, move_card, EngineCommand, MoveError};
pub use engine::seed_ops::Difficulty;
pub use engine::smart_move::{auto_move, auto_move_target};
pub use game::{Card, CardLocation, FreecellGame, SlotId, Suit};
