//! Smart placement for a double-clicked or double-tapped card: foundation
//! first, then any open freecell. Only the single exposed top card ever
//! moves; runs are strictly a drag affair.

use crate::engine::commands::{execute_command, EngineCommand};
use crate::game::{
    can_stack_foundation, Card, CardLocation, FreecellGame, SlotId, FOUNDATION_COUNT,
    FREECELL_COUNT,
};

/// First legal automatic destination for `card`, or `None` when the card is
/// buried, already retired to a foundation, or has nowhere to go. A card
/// sitting in a freecell is only ever promoted to a foundation, never parked
/// in another cell or sent back to the tableau.
pub fn auto_move_target(state: &FreecellGame, card: Card) -> Option<SlotId> {
    let from_freecell = match state.locate(card)? {
        CardLocation::Column { col, index } => {
            if index + 1 != state.columns()[col].len() {
                return None;
            }
            false
        }
        CardLocation::Freecell { .. } => true,
        CardLocation::Foundation { .. } => return None,
    };

    for foundation in 0..FOUNDATION_COUNT {
        if can_stack_foundation(state.foundation_top(foundation).as_ref(), card) {
            return Some(SlotId::Foundation(foundation));
        }
    }

    if !from_freecell {
        for cell in 0..FREECELL_COUNT {
            if state.freecell_card(cell).is_none() {
                return Some(SlotId::Freecell(cell));
            }
        }
    }

    None
}

/// Resolve and apply the automatic move, returning the new snapshot, or
/// `None` when no legal destination exists (the input state is untouched).
pub fn auto_move(state: &FreecellGame, card: Card) -> Option<FreecellGame> {
    let Some(target) = auto_move_target(state, card) else {
        tracing::trace!(card = %card.label(), "no automatic destination");
        return None;
    };

    let command = match (state.locate(card)?, target) {
        (CardLocation::Column { col, .. }, SlotId::Foundation(foundation)) => {
            EngineCommand::ColumnTopToFoundation {
                src: col,
                foundation,
            }
        }
        (CardLocation::Column { col, .. }, SlotId::Freecell(cell)) => {
            EngineCommand::ColumnTopToFreecell { src: col, cell }
        }
        (CardLocation::Freecell { cell }, SlotId::Foundation(foundation)) => {
            EngineCommand::FreecellToFoundation { cell, foundation }
        }
        _ => return None,
    };

    let next = execute_command(state, command).ok()?;
    tracing::debug!(card = %card.label(), target = %target.id(), "auto-moved");
    Some(next)
}
