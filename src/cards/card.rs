//! Card variants.
//!
//! - Helper cards: `Survival` (hunted players) and `Hunt` (the Creature).
//! - Place cards numbered 1 to 10: `HandPlaceCard` in a player's hand,
//!   `MapPlaceCard` laid out on the Artemia map.
//!
//! Map place cards are identified by their number alone. Comparing one with a
//! card of another variant is a usage error, see [`MapPlaceCard::try_eq_card`].

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TopologyError};

/// Smallest place card number.
pub const MIN_PLACE_NUMBER: u8 = 1;

/// Largest place card number.
pub const MAX_PLACE_NUMBER: u8 = 10;

fn check_place_number(number: u8) -> Result<u8> {
    if (MIN_PLACE_NUMBER..=MAX_PLACE_NUMBER).contains(&number) {
        Ok(number)
    } else {
        Err(TopologyError::InvalidPlaceCardNumber(number))
    }
}

/// Helper cards drawn by either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelperCard {
    Survival,
    Hunt,
}

/// A place card held in a player's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HandPlaceCard {
    number: u8,
}

impl HandPlaceCard {
    /// Create the hand place card numbered `number` (1 to 10).
    pub fn from_number(number: u8) -> Result<Self> {
        Ok(Self {
            number: check_place_number(number)?,
        })
    }

    /// Get the place number (1 to 10).
    #[must_use]
    pub fn number(self) -> u8 {
        self.number
    }
}

/// A place card laid out on the map, identified by its number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MapPlaceCard {
    number: u8,
}

impl MapPlaceCard {
    /// Create the map place card numbered `number` (1 to 10).
    pub fn from_number(number: u8) -> Result<Self> {
        Ok(Self {
            number: check_place_number(number)?,
        })
    }

    /// The ten map place cards, numbered 1 to 10 in order.
    #[must_use]
    pub fn full_set() -> Vec<Self> {
        (MIN_PLACE_NUMBER..=MAX_PLACE_NUMBER)
            .map(|number| Self { number })
            .collect()
    }

    /// Get the place number (1 to 10).
    #[must_use]
    pub fn number(self) -> u8 {
        self.number
    }

    /// Compare with an arbitrary card.
    ///
    /// Fails with `TypeMismatch` unless `other` is a map place card.
    pub fn try_eq_card(&self, other: &Card) -> Result<bool> {
        match other {
            Card::Place(PlaceCard::Map(card)) => Ok(card == self),
            other => Err(TopologyError::TypeMismatch {
                expected: "map place card",
                found: other.variant_name(),
            }),
        }
    }
}

macro_rules! place_card_conversions {
    ($card:ty) => {
        impl TryFrom<u8> for $card {
            type Error = TopologyError;

            fn try_from(number: u8) -> Result<Self> {
                Self::from_number(number)
            }
        }

        impl From<$card> for u8 {
            fn from(card: $card) -> u8 {
                card.number
            }
        }
    };
}

place_card_conversions!(HandPlaceCard);
place_card_conversions!(MapPlaceCard);

/// Either kind of place card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceCard {
    Hand(HandPlaceCard),
    Map(MapPlaceCard),
}

impl PlaceCard {
    /// Get the place number (1 to 10).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            PlaceCard::Hand(card) => card.number(),
            PlaceCard::Map(card) => card.number(),
        }
    }
}

/// Any card that can sit in a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Helper(HelperCard),
    Place(PlaceCard),
}

impl Card {
    /// Human-readable variant name.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Card::Helper(HelperCard::Survival) => "survival card",
            Card::Helper(HelperCard::Hunt) => "hunt card",
            Card::Place(PlaceCard::Hand(_)) => "hand place card",
            Card::Place(PlaceCard::Map(_)) => "map place card",
        }
    }

    /// Place card number, `None` for helper cards.
    #[must_use]
    pub fn place_number(&self) -> Option<u8> {
        match self {
            Card::Helper(_) => None,
            Card::Place(card) => Some(card.number()),
        }
    }

    /// Check if this is a helper card.
    #[must_use]
    pub fn is_helper(&self) -> bool {
        matches!(self, Card::Helper(_))
    }
}

impl From<HelperCard> for Card {
    fn from(card: HelperCard) -> Self {
        Card::Helper(card)
    }
}

impl From<PlaceCard> for Card {
    fn from(card: PlaceCard) -> Self {
        Card::Place(card)
    }
}

impl From<HandPlaceCard> for Card {
    fn from(card: HandPlaceCard) -> Self {
        Card::Place(PlaceCard::Hand(card))
    }
}

impl From<MapPlaceCard> for Card {
    fn from(card: MapPlaceCard) -> Self {
        Card::Place(PlaceCard::Map(card))
    }
}
