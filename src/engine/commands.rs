//! Command vocabulary between the interface layer and the rules.
//!
//! UI code resolves a drag or tap into either a concrete `EngineCommand` or
//! a card-identity-plus-destination request for `move_card`. Both paths
//! return a fresh snapshot on success and a typed rejection otherwise; the
//! input state is never touched.

use crate::game::{
    can_stack_column, is_descending_alternating_run, Card, CardLocation, FreecellGame, SlotId,
    COLUMN_COUNT, FOUNDATION_COUNT, FREECELL_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    ColumnTopToFreecell { src: usize, cell: usize },
    ColumnTopToFoundation { src: usize, foundation: usize },
    ColumnRunToColumn { src: usize, start: usize, dst: usize },
    FreecellToFoundation { cell: usize, foundation: usize },
    FreecellToColumn { cell: usize, dst: usize },
    FreecellToFreecell { src: usize, dst: usize },
}

/// Why a move request was refused. `UnknownCard` and `UnknownSlot` signal
/// caller bugs (a well-formed state cannot produce them); everything else is
/// an ordinary rejected-move outcome for the UI to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("card is not part of this game")]
    UnknownCard,
    #[error("no such slot")]
    UnknownSlot,
    #[error("cards on a foundation stay put")]
    SourceLocked,
    #[error("only the exposed top card can move on its own")]
    NotExposed,
    #[error("cards do not form a descending alternating-color run")]
    InvalidRun,
    #[error("not enough free cells and empty columns to move a run this long")]
    InsufficientCapacity,
    #[error("destination cannot take this card")]
    RejectedByTarget,
}

pub fn execute_command(
    state: &FreecellGame,
    command: EngineCommand,
) -> Result<FreecellGame, MoveError> {
    match command {
        EngineCommand::ColumnTopToFreecell { src, cell } => {
            check_column(src)?;
            check_freecell(cell)?;
            if state.column_top(src).is_none() {
                return Err(MoveError::NotExposed);
            }
            state
                .move_column_top_to_freecell(src, cell)
                .ok_or(MoveError::RejectedByTarget)
        }
        EngineCommand::ColumnTopToFoundation { src, foundation } => {
            check_column(src)?;
            check_foundation(foundation)?;
            if state.column_top(src).is_none() {
                return Err(MoveError::NotExposed);
            }
            state
                .move_column_top_to_foundation(src, foundation)
                .ok_or(MoveError::RejectedByTarget)
        }
        EngineCommand::ColumnRunToColumn { src, start, dst } => {
            check_column(src)?;
            check_column(dst)?;
            let source = &state.columns()[src];
            if src == dst || start >= source.len() {
                return Err(MoveError::RejectedByTarget);
            }
            let run = &source[start..];
            if !is_descending_alternating_run(run) {
                return Err(MoveError::InvalidRun);
            }
            if !can_stack_column(state.columns()[dst].last(), run[0]) {
                return Err(MoveError::RejectedByTarget);
            }
            if run.len() > state.max_movable_into(dst) {
                return Err(MoveError::InsufficientCapacity);
            }
            state
                .move_column_run_to_column(src, start, dst)
                .ok_or(MoveError::RejectedByTarget)
        }
        EngineCommand::FreecellToFoundation { cell, foundation } => {
            check_freecell(cell)?;
            check_foundation(foundation)?;
            state
                .move_freecell_to_foundation(cell, foundation)
                .ok_or(MoveError::RejectedByTarget)
        }
        EngineCommand::FreecellToColumn { cell, dst } => {
            check_freecell(cell)?;
            check_column(dst)?;
            state
                .move_freecell_to_column(cell, dst)
                .ok_or(MoveError::RejectedByTarget)
        }
        EngineCommand::FreecellToFreecell { src, dst } => {
            check_freecell(src)?;
            check_freecell(dst)?;
            state
                .move_freecell_to_freecell(src, dst)
                .ok_or(MoveError::RejectedByTarget)
        }
    }
}

/// Identity-based entry point: find `card`, work out what kind of move
/// landing it on `dest` would be, and execute it. A column-to-column request
/// for a buried card becomes a run move of the suffix starting at that card.
pub fn move_card(
    state: &FreecellGame,
    card: Card,
    dest: SlotId,
) -> Result<FreecellGame, MoveError> {
    let location = state.locate(card).ok_or(MoveError::UnknownCard)?;

    let command = match (location, dest) {
        (CardLocation::Foundation { .. }, _) => return Err(MoveError::SourceLocked),
        (CardLocation::Column { col, index }, SlotId::Column(dst)) => {
            EngineCommand::ColumnRunToColumn {
                src: col,
                start: index,
                dst,
            }
        }
        (CardLocation::Column { col, index }, SlotId::Freecell(cell)) => {
            check_exposed(state, col, index)?;
            EngineCommand::ColumnTopToFreecell { src: col, cell }
        }
        (CardLocation::Column { col, index }, SlotId::Foundation(foundation)) => {
            check_exposed(state, col, index)?;
            EngineCommand::ColumnTopToFoundation {
                src: col,
                foundation,
            }
        }
        (CardLocation::Freecell { cell }, SlotId::Foundation(foundation)) => {
            EngineCommand::FreecellToFoundation { cell, foundation }
        }
        (CardLocation::Freecell { cell }, SlotId::Column(dst)) => {
            EngineCommand::FreecellToColumn { cell, dst }
        }
        (CardLocation::Freecell { cell }, SlotId::Freecell(dst)) => {
            EngineCommand::FreecellToFreecell { src: cell, dst }
        }
    };

    execute_command(state, command)
}

fn check_column(col: usize) -> Result<(), MoveError> {
    if col < COLUMN_COUNT {
        Ok(())
    } else {
        Err(MoveError::UnknownSlot)
    }
}

fn check_freecell(cell: usize) -> Result<(), MoveError> {
    if cell < FREECELL_COUNT {
        Ok(())
    } else {
        Err(MoveError::UnknownSlot)
    }
}

fn check_foundation(foundation: usize) -> Result<(), MoveError> {
    if foundation < FOUNDATION_COUNT {
        Ok(())
    } else {
        Err(MoveError::UnknownSlot)
    }
}

fn check_exposed(state: &FreecellGame, col: usize, index: usize) -> Result<(), MoveError> {
    if index + 1 == state.columns()[col].len() {
        Ok(())
    } else {
        Err(MoveError::NotExposed)
    }
}
