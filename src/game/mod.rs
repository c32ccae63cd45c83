pub mod freecell;
pub mod setup;
pub mod types;

pub use freecell::{
    can_stack_column, can_stack_foundation, is_descending_alternating_run, max_movable,
    FreecellGame, COLUMN_COUNT, FOUNDATION_COUNT, FREECELL_COUNT,
};
pub use setup::{shuffle_seeded, standard_deck, MsRng};
pub use types::{Card, CardLocation, SlotId, Suit};


pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

pub fn rank_from_label(label: &str) -> Option<u8> {
    match label {
        "A" => Some(1),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        _ => match label.parse::<u8>() {
            Ok(rank) if (2..=10).contains(&rank) => Some(rank),
            _ => None,
        },
    }
}
