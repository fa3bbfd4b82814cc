//! Ordered card packs.
//!
//! A pack is a queue of cards: index 0 is the top, the next card drawn.
//! Order only changes on an explicit shuffle; draws and insertions keep the
//! relative order of every other card.
//!
//! Packs come in two roles, the active draw pool and the discard pile. They
//! support the same operations, but only packs of the same role can be
//! concatenated.
//!
//! Storage is a persistent `im::Vector`, so cloning a pack is O(1).
//!
//! ```
//! use not_alone::cards::{Card, HelperCard, Pack, PackKind, Side};
//!
//! let mut pack = Pack::from_cards(PackKind::Discard, vec![Card::from(HelperCard::Survival)]);
//! pack.append(Card::from(HelperCard::Hunt), Side::Top);
//! assert_eq!(pack.draw().unwrap(), Card::from(HelperCard::Hunt));
//! assert_eq!(pack.len(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::card::Card;
use crate::core::error::{Result, TopologyError};
use crate::core::rng::PackRng;

/// Role of a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackKind {
    /// Draw pool, expected to be shuffled.
    Active,
    /// Discard pile, kept in discard order.
    Discard,
}

impl PackKind {
    /// Human-readable role name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PackKind::Active => "active pack",
            PackKind::Discard => "discard pack",
        }
    }
}

/// End of the pack where cards are inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Front of the queue, drawn next.
    Top,
    /// Back of the queue.
    #[default]
    Bottom,
}

impl std::str::FromStr for Side {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            other => Err(TopologyError::InvalidInsertionSide(other.to_string())),
        }
    }
}

/// Result of [`Pack::draw_n`]: one card for `n == 1`, a list otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Drawn {
    One(Card),
    Many(Vec<Card>),
}

impl Drawn {
    /// Flatten into a list regardless of how many cards were drawn.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        match self {
            Drawn::One(card) => vec![card],
            Drawn::Many(cards) => cards,
        }
    }
}

/// An ordered, mutable queue of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    kind: PackKind,
    cards: Vector<Card>,
}

impl Pack {
    /// Create an empty pack.
    #[must_use]
    pub fn new(kind: PackKind) -> Self {
        Self {
            kind,
            cards: Vector::new(),
        }
    }

    /// Build a pack holding `cards` in the given order.
    pub fn from_cards(kind: PackKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a shuffled draw pool.
    pub fn active_from_cards(cards: impl IntoIterator<Item = Card>, rng: &mut PackRng) -> Self {
        let mut pack = Self::from_cards(PackKind::Active, cards);
        pack.shuffle(rng);
        pack
    }

    /// Build a discard pile in the given order.
    pub fn discard_from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::from_cards(PackKind::Discard, cards)
    }

    /// Get the pack role.
    #[must_use]
    pub fn kind(&self) -> PackKind {
        self.kind
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pack holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that would be drawn next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        let card = self.cards.pop_front().ok_or(TopologyError::InsufficientCards {
            have: 0,
            requested: 1,
        })?;
        trace!(pack = self.kind.name(), remaining = self.cards.len(), "Card drawn");
        Ok(card)
    }

    /// Remove and return the top `n` cards, top first.
    ///
    /// Fails without touching the pack if it holds fewer than `n` cards.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>> {
        let have = self.cards.len();
        if n > have {
            return Err(TopologyError::InsufficientCards { have, requested: n });
        }

        let rest = self.cards.split_off(n);
        let drawn = std::mem::replace(&mut self.cards, rest);
        trace!(pack = self.kind.name(), drawn = n, remaining = self.cards.len(), "Cards drawn");
        Ok(drawn.into_iter().collect())
    }

    /// Draw `n` cards, returning a single card when `n == 1`.
    pub fn draw_n(&mut self, n: usize) -> Result<Drawn> {
        if n == 1 {
            self.draw().map(Drawn::One)
        } else {
            self.draw_many(n).map(Drawn::Many)
        }
    }

    /// Insert one card at the given end.
    pub fn append(&mut self, card: Card, side: Side) {
        match side {
            Side::Top => self.cards.push_front(card),
            Side::Bottom => self.cards.push_back(card),
        }
        trace!(pack = self.kind.name(), ?side, len = self.cards.len(), "Card inserted");
    }

    /// Insert several cards at the given end, keeping their order.
    ///
    /// With `Side::Top` the first given card becomes the next one drawn.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>, side: Side) {
        let incoming: Vector<Card> = cards.into_iter().collect();
        let count = incoming.len();
        match side {
            Side::Top => {
                let below = std::mem::replace(&mut self.cards, incoming);
                self.cards.append(below);
            }
            Side::Bottom => self.cards.append(incoming),
        }
        trace!(pack = self.kind.name(), ?side, count, len = self.cards.len(), "Cards inserted");
    }

    /// Insert one card, then shuffle the whole pack.
    pub fn append_and_shuffle(&mut self, card: Card, side: Side, rng: &mut PackRng) {
        self.append(card, side);
        self.shuffle(rng);
    }

    /// Insert several cards, then shuffle the whole pack.
    pub fn extend_and_shuffle(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
        side: Side,
        rng: &mut PackRng,
    ) {
        self.extend(cards, side);
        self.shuffle(rng);
    }

    /// Randomize the order of the whole pack.
    pub fn shuffle(&mut self, rng: &mut PackRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
        debug!(pack = self.kind.name(), len = self.cards.len(), seed = rng.seed(), "Pack shuffled");
    }

    /// Concatenate two packs of the same role into a new pack, `self` on top.
    ///
    /// Both inputs are left as they were, whether or not the roles match.
    pub fn concat(&self, other: &Pack) -> Result<Pack> {
        let mut joined = self.clone();
        joined.merge(other)?;
        Ok(joined)
    }

    /// Copy every card of `other` to the bottom of `self`.
    ///
    /// Fails without touching either pack if their roles differ.
    pub fn merge(&mut self, other: &Pack) -> Result<()> {
        if self.kind != other.kind {
            return Err(TopologyError::TypeMismatch {
                expected: self.kind.name(),
                found: other.kind.name(),
            });
        }
        self.cards.append(other.cards.clone());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
