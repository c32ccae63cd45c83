use super::*;

/// The MSVC `rand()` generator the legacy deal numbers were published
/// against. State is 31-bit, output is the upper 15 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsRng {
    state: u32,
}

impl MsRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(214_013)
            .wrapping_add(2_531_011)
            & 0x7FFF_FFFF;
        (self.state >> 16) & 0x7FFF
    }
}

pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Descending Fisher-Yates driven by `MsRng`. Both the loop direction and
/// the `% (i + 1)` draw must stay exactly as-is: the curated seed pools are
/// only meaningful against this permutation.
pub fn shuffle_seeded(deck: &mut [Card], seed: u32) {
    let mut rng = MsRng::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next() as usize % (i + 1);
        deck.swap(i, j);
    }
}

impl FreecellGame {
    pub fn new_with_seed(seed: u32) -> Self {
        let mut deck = standard_deck();
        shuffle_seeded(&mut deck, seed);

        let mut columns: [Vec<Card>; COLUMN_COUNT] = std::array::from_fn(|_| Vec::new());
        for (idx, card) in deck.into_iter().enumerate() {
            columns[idx % COLUMN_COUNT].push(card);
        }

        tracing::debug!(seed, "dealt new game");
        Self::from_parts(
            std::array::from_fn(|_| Vec::new()),
            [None; FREECELL_COUNT],
            columns,
        )
    }
}
