use super::{Card, CardLocation};

pub const FOUNDATION_COUNT: usize = 4;
pub const FREECELL_COUNT: usize = 4;
pub const COLUMN_COUNT: usize = 8;

/// Full game state: four named foundations, four freecells, eight tableau
/// columns. Columns store cards base-first; the last element is the exposed
/// top. The union of all zones is always exactly one 52-card deck.
///
/// Every move operation takes `&self` and returns a fresh snapshot, so a
/// caller can keep prior values for history without any extra machinery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreecellGame {
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    freecells: [Option<Card>; FREECELL_COUNT],
    columns: [Vec<Card>; COLUMN_COUNT],
}

impl FreecellGame {
    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn freecells(&self) -> &[Option<Card>; FREECELL_COUNT] {
        &self.freecells
    }

    pub fn columns(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.columns
    }

    pub fn column_top(&self, col: usize) -> Option<Card> {
        self.columns.get(col).and_then(|pile| pile.last().copied())
    }

    pub fn column_card(&self, col: usize, index: usize) -> Option<Card> {
        self.columns
            .get(col)
            .and_then(|pile| pile.get(index))
            .copied()
    }

    pub fn freecell_card(&self, cell: usize) -> Option<Card> {
        self.freecells.get(cell).and_then(|slot| *slot)
    }

    pub fn foundation_top(&self, foundation: usize) -> Option<Card> {
        self.foundations
            .get(foundation)
            .and_then(|pile| pile.last().copied())
    }

    /// Unified containment search: columns, then freecells, then foundations.
    pub fn locate(&self, card: Card) -> Option<CardLocation> {
        for (col, pile) in self.columns.iter().enumerate() {
            if let Some(index) = pile.iter().position(|&c| c == card) {
                return Some(CardLocation::Column { col, index });
            }
        }
        for (cell, slot) in self.freecells.iter().enumerate() {
            if *slot == Some(card) {
                return Some(CardLocation::Freecell { cell });
            }
        }
        for (foundation, pile) in self.foundations.iter().enumerate() {
            if let Some(index) = pile.iter().position(|&c| c == card) {
                return Some(CardLocation::Foundation { foundation, index });
            }
        }
        None
    }

    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == 13)
    }

    pub fn has_legal_moves(&self) -> bool {
        if self.is_won() {
            return false;
        }

        for cell in 0..FREECELL_COUNT {
            for foundation in 0..FOUNDATION_COUNT {
                if self.can_move_freecell_to_foundation(cell, foundation) {
                    return true;
                }
            }
            for dst in 0..COLUMN_COUNT {
                if self.can_move_freecell_to_column(cell, dst) {
                    return true;
                }
            }
        }

        for src in 0..COLUMN_COUNT {
            for foundation in 0..FOUNDATION_COUNT {
                if self.can_move_column_top_to_foundation(src, foundation) {
                    return true;
                }
            }
            for cell in 0..FREECELL_COUNT {
                if self.can_move_column_top_to_freecell(src, cell) {
                    return true;
                }
            }
            let len = self.columns[src].len();
            for start in 0..len {
                for dst in 0..COLUMN_COUNT {
                    if self.can_move_column_run_to_column(src, start, dst) {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn is_lost(&self) -> bool {
        !self.is_won() && !self.has_legal_moves()
    }

    /// Supermove capacity for a move landing on `dst`. An empty destination
    /// is being consumed, not used as scratch space, so it is excluded from
    /// the empty-column count.
    pub fn max_movable_into(&self, dst: usize) -> usize {
        let empty_cells = self.freecells.iter().filter(|slot| slot.is_none()).count();
        let mut empty_columns = self.columns.iter().filter(|pile| pile.is_empty()).count();
        if self.columns.get(dst).is_some_and(|pile| pile.is_empty()) {
            empty_columns = empty_columns.saturating_sub(1);
        }
        max_movable(empty_cells, empty_columns)
    }

    pub fn can_move_column_top_to_freecell(&self, src: usize, cell: usize) -> bool {
        if src >= COLUMN_COUNT || cell >= FREECELL_COUNT {
            return false;
        }
        self.freecells[cell].is_none() && !self.columns[src].is_empty()
    }

    pub fn move_column_top_to_freecell(&self, src: usize, cell: usize) -> Option<Self> {
        if !self.can_move_column_top_to_freecell(src, cell) {
            return None;
        }
        let mut next = self.clone();
        let card = next.columns[src].pop()?;
        next.freecells[cell] = Some(card);
        Some(next)
    }

    pub fn can_move_column_top_to_foundation(&self, src: usize, foundation: usize) -> bool {
        if src >= COLUMN_COUNT || foundation >= FOUNDATION_COUNT {
            return false;
        }
        let Some(card) = self.column_top(src) else {
            return false;
        };
        can_stack_foundation(self.foundations[foundation].last(), card)
    }

    pub fn move_column_top_to_foundation(&self, src: usize, foundation: usize) -> Option<Self> {
        if !self.can_move_column_top_to_foundation(src, foundation) {
            return None;
        }
        let mut next = self.clone();
        let card = next.columns[src].pop()?;
        next.foundations[foundation].push(card);
        Some(next)
    }

    pub fn can_move_freecell_to_foundation(&self, cell: usize, foundation: usize) -> bool {
        if foundation >= FOUNDATION_COUNT {
            return false;
        }
        let Some(card) = self.freecell_card(cell) else {
            return false;
        };
        can_stack_foundation(self.foundations[foundation].last(), card)
    }

    pub fn move_freecell_to_foundation(&self, cell: usize, foundation: usize) -> Option<Self> {
        if !self.can_move_freecell_to_foundation(cell, foundation) {
            return None;
        }
        let mut next = self.clone();
        let card = next.freecells[cell].take()?;
        next.foundations[foundation].push(card);
        Some(next)
    }

    pub fn can_move_freecell_to_column(&self, cell: usize, dst: usize) -> bool {
        if dst >= COLUMN_COUNT {
            return false;
        }
        let Some(card) = self.freecell_card(cell) else {
            return false;
        };
        can_stack_column(self.columns[dst].last(), card)
    }

    pub fn move_freecell_to_column(&self, cell: usize, dst: usize) -> Option<Self> {
        if !self.can_move_freecell_to_column(cell, dst) {
            return None;
        }
        let mut next = self.clone();
        let card = next.freecells[cell].take()?;
        next.columns[dst].push(card);
        Some(next)
    }

    pub fn can_move_freecell_to_freecell(&self, src: usize, dst: usize) -> bool {
        if src == dst || dst >= FREECELL_COUNT {
            return false;
        }
        self.freecell_card(src).is_some() && self.freecells[dst].is_none()
    }

    pub fn move_freecell_to_freecell(&self, src: usize, dst: usize) -> Option<Self> {
        if !self.can_move_freecell_to_freecell(src, dst) {
            return None;
        }
        let mut next = self.clone();
        let card = next.freecells[src].take()?;
        next.freecells[dst] = Some(card);
        Some(next)
    }

    pub fn can_move_column_run_to_column(&self, src: usize, start: usize, dst: usize) -> bool {
        if src == dst || src >= COLUMN_COUNT || dst >= COLUMN_COUNT {
            return false;
        }
        let source = &self.columns[src];
        if start >= source.len() {
            return false;
        }

        let run = &source[start..];
        if !is_descending_alternating_run(run) {
            return false;
        }

        if !can_stack_column(self.columns[dst].last(), run[0]) {
            return false;
        }

        run.len() <= self.max_movable_into(dst)
    }

    pub fn move_column_run_to_column(&self, src: usize, start: usize, dst: usize) -> Option<Self> {
        if !self.can_move_column_run_to_column(src, start, dst) {
            return None;
        }
        let mut next = self.clone();
        let moved = next.columns[src].split_off(start);
        next.columns[dst].extend(moved);
        Some(next)
    }

    pub(crate) fn from_parts(
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        freecells: [Option<Card>; FREECELL_COUNT],
        columns: [Vec<Card>; COLUMN_COUNT],
    ) -> Self {
        Self {
            foundations,
            freecells,
            columns,
        }
    }
}

#[cfg(test)]
impl FreecellGame {
    pub(crate) fn debug_new(
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        freecells: [Option<Card>; FREECELL_COUNT],
        columns: [Vec<Card>; COLUMN_COUNT],
    ) -> Self {
        Self::from_parts(foundations, freecells, columns)
    }
}

/// An empty column accepts any card; otherwise the incoming card must be the
/// opposite color and exactly one rank below the exposed top.
pub fn can_stack_column(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => true,
        Some(top) => top.rank == card.rank + 1 && top.color_red() != card.color_red(),
    }
}

/// An empty foundation accepts only an ace; otherwise same suit, one rank up.
pub fn can_stack_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 1,
        Some(top) => top.suit == card.suit && card.rank == top.rank + 1,
    }
}

/// True for any sequence of length <= 1, otherwise every adjacent pair must
/// descend by one rank with alternating colors (base toward exposed top).
pub fn is_descending_alternating_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let a = pair[0];
        let b = pair[1];
        a.rank == b.rank + 1 && a.color_red() != b.color_red()
    })
}

/// Supermove capacity: each empty freecell parks one extra card, each empty
/// column doubles the total.
pub fn max_movable(empty_freecells: usize, empty_columns: usize) -> usize {
    (1 + empty_freecells) * (1_usize << empty_columns)
}
