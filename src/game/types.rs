use super::{rank_from_label, rank_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "clubs" => Some(Suit::Clubs),
            "diamonds" => Some(Suit::Diamonds),
            "hearts" => Some(Suit::Hearts),
            "spades" => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    pub fn color_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Stable external token, e.g. `"clubs-A"` or `"hearts-10"`.
    pub fn identity(&self) -> String {
        format!("{}-{}", self.suit.id(), rank_label(self.rank))
    }

    pub fn from_identity(identity: &str) -> Option<Self> {
        let (suit, rank) = identity.split_once('-')?;
        Some(Card {
            suit: Suit::from_id(suit)?,
            rank: rank_from_label(rank)?,
        })
    }
}

/// A destination (or source) slot named the way the interface layer names
/// them: `foundation-1..4`, `freecell-1..4`, `col-1..8`. Indexes are 0-based
/// internally, 1-based in the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Foundation(usize),
    Freecell(usize),
    Column(usize),
}

impl SlotId {
    pub fn from_id(id: &str) -> Option<Self> {
        let (zone, number) = id.rsplit_once('-')?;
        let number = number.parse::<usize>().ok()?;
        let slot = match zone {
            "foundation" if (1..=4).contains(&number) => SlotId::Foundation(number - 1),
            "freecell" if (1..=4).contains(&number) => SlotId::Freecell(number - 1),
            "col" if (1..=8).contains(&number) => SlotId::Column(number - 1),
            _ => return None,
        };
        Some(slot)
    }

    pub fn id(self) -> String {
        match self {
            SlotId::Foundation(idx) => format!("foundation-{}", idx + 1),
            SlotId::Freecell(idx) => format!("freecell-{}", idx + 1),
            SlotId::Column(idx) => format!("col-{}", idx + 1),
        }
    }
}

/// Where a card currently sits, as reported by `FreecellGame::locate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLocation {
    Column { col: usize, index: usize },
    Freecell { cell: usize },
    Foundation { foundation: usize, index: usize },
}

impl CardLocation {
    pub fn slot(self) -> SlotId {
        match self {
            CardLocation::Column { col, .. } => SlotId::Column(col),
            CardLocation::Freecell { cell } => SlotId::Freecell(cell),
            CardLocation::Foundation { foundation, .. } => SlotId::Foundation(foundation),
        }
    }
}
