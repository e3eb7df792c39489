//! Card types and deck generation.

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::vec::Vec;

/// Number of features on every card.
pub const FEATURE_COUNT: usize = 4;

/// Number of cards in the deck (one per feature combination, 3^4).
pub const DECK_SIZE: usize = 81;

/// One of the three values a feature can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// First variant.
    V1,
    /// Second variant.
    V2,
    /// Third variant.
    V3,
}

impl Variant {
    /// All variants in order.
    pub const ALL: [Self; 3] = [Self::V1, Self::V2, Self::V3];

    /// Returns the zero-based position of the variant.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::V1 => 0,
            Self::V2 => 1,
            Self::V3 => 2,
        }
    }
}

/// Stable card identifier: the card's position in feature enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

/// A Set card.
///
/// Equality and hashing only look at the identifier. In a generated deck
/// every feature combination occurs once, so this agrees with comparing
/// features, but callers should not rely on that.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    id: CardId,
    features: [Variant; FEATURE_COUNT],
}

impl Card {
    /// Creates a card with an explicit identifier.
    #[must_use]
    pub const fn new(id: CardId, features: [Variant; FEATURE_COUNT]) -> Self {
        Self { id, features }
    }

    /// Creates the card for a feature combination, deriving its identifier
    /// from the combination's enumeration index.
    #[must_use]
    pub const fn from_features(features: [Variant; FEATURE_COUNT]) -> Self {
        let mut index = 0;
        let mut i = 0;
        while i < FEATURE_COUNT {
            index = index * 3 + features[i].index();
            i += 1;
        }
        Self::new(CardId(index as u8), features)
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns all four features.
    #[must_use]
    pub const fn features(&self) -> [Variant; FEATURE_COUNT] {
        self.features
    }

    /// Returns a single feature. `index` must be below [`FEATURE_COUNT`].
    #[must_use]
    pub(crate) const fn feature(&self, index: usize) -> Variant {
        self.features[index]
    }

    /// Symbol shape, taken from the first feature.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self.features[0] {
            Variant::V1 => Shape::Circle,
            Variant::V2 => Shape::Triangle,
            Variant::V3 => Shape::Square,
        }
    }

    /// Number of symbols (1 to 3), taken from the second feature.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.features[1].index() as u8 + 1
    }

    /// Symbol color, taken from the third feature.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self.features[2] {
            Variant::V1 => Color::Blue,
            Variant::V2 => Color::Red,
            Variant::V3 => Color::Green,
        }
    }

    /// Symbol shading, taken from the fourth feature.
    #[must_use]
    pub const fn shading(&self) -> Shading {
        match self.features[3] {
            Variant::V1 => Shading::Filled,
            Variant::V2 => Shading::Striped,
            Variant::V3 => Shading::Outlined,
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.count();
        let shape = self.shape().name();
        let plural = if count == 1 { "" } else { "s" };
        write!(
            f,
            "{count} {} {} {shape}{plural}",
            self.color().name(),
            self.shading().name()
        )
    }
}

/// Symbol shape drawn on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// ●
    Circle,
    /// ▲
    Triangle,
    /// ■
    Square,
}

impl Shape {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Square => "square",
        }
    }

    /// Glyph used by text renderers.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Circle => '●',
            Self::Triangle => '▲',
            Self::Square => '■',
        }
    }
}

/// Symbol color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
}

impl Color {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

/// Symbol shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Solid fill.
    Filled,
    /// Striped fill.
    Striped,
    /// Outline only.
    Outlined,
}

impl Shading {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Striped => "striped",
            Self::Outlined => "outlined",
        }
    }
}

/// Builds the unshuffled deck, one card per feature combination.
///
/// Cards come out in enumeration order, so `deck[i].id() == CardId(i)`.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for f1 in Variant::ALL {
        for f2 in Variant::ALL {
            for f3 in Variant::ALL {
                for f4 in Variant::ALL {
                    let id = CardId(cards.len() as u8);
                    cards.push(Card::new(id, [f1, f2, f3, f4]));
                }
            }
        }
    }

    cards
}
