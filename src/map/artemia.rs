//! The Artemia map: ten map place cards laid out over the fixed slot graph.
//!
//! Cards are stored in the order they were supplied, so the card at input
//! index `i` sits in slot `i`. Neighbor queries resolve a card number to its
//! slot, then return the cards in the adjacent slots.
//!
//! ```
//! use not_alone::cards::MapPlaceCard;
//! use not_alone::map::ArtemiaMap;
//!
//! let map = ArtemiaMap::from_place_cards(MapPlaceCard::full_set()).unwrap();
//! let neighbors: Vec<u8> = map
//!     .get_neighbors_by_id(2)
//!     .unwrap()
//!     .iter()
//!     .map(|card| card.number())
//!     .collect();
//! assert_eq!(neighbors, vec![1, 3, 7]);
//! ```

use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::graph::{SlotGraph, SLOT_COUNT};
use crate::cards::card::{MapPlaceCard, MAX_PLACE_NUMBER, MIN_PLACE_NUMBER};
use crate::core::error::{Result, TopologyError};
use crate::core::rng::PackRng;

/// Cards adjacent to a queried card.
pub type Neighbors<'a> = SmallVec<[&'a MapPlaceCard; 3]>;

/// Ten map place cards over the two-row slot graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtemiaMap {
    cards: Vec<MapPlaceCard>,
    graph: SlotGraph,
}

impl ArtemiaMap {
    /// Lay out `cards` in slot order.
    ///
    /// Fails with `MapSetup` unless exactly ten cards are given.
    pub fn from_place_cards(cards: impl IntoIterator<Item = MapPlaceCard>) -> Result<Self> {
        let cards: Vec<MapPlaceCard> = cards.into_iter().collect();
        if cards.len() != SLOT_COUNT {
            return Err(TopologyError::MapSetup { given: cards.len() });
        }

        let graph = SlotGraph::new();
        debug!(
            layout = ?cards.iter().map(|c| c.number()).collect::<Vec<_>>(),
            edges = graph.edge_count(),
            "Artemia map built"
        );
        Ok(Self { cards, graph })
    }

    /// Lay out the full set of ten cards in a random order.
    #[must_use]
    pub fn shuffled(rng: &mut PackRng) -> Self {
        let mut cards = MapPlaceCard::full_set();
        rng.shuffle(&mut cards);
        Self {
            cards,
            graph: SlotGraph::new(),
        }
    }

    /// Cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[MapPlaceCard] {
        &self.cards
    }

    /// Get the slot graph.
    #[must_use]
    pub fn graph(&self) -> &SlotGraph {
        &self.graph
    }

    /// Card sitting in `slot`.
    #[must_use]
    pub fn card_at(&self, slot: usize) -> Option<&MapPlaceCard> {
        self.cards.get(slot)
    }

    /// Slot holding the card numbered `id`.
    pub fn slot_of(&self, id: u8) -> Result<usize> {
        self.cards
            .iter()
            .position(|card| card.number() == id)
            .ok_or(TopologyError::CardNotFound(id))
    }

    /// The card numbered `id`.
    pub fn get_card(&self, id: u8) -> Result<&MapPlaceCard> {
        let slot = self.slot_of(id)?;
        Ok(&self.cards[slot])
    }

    /// Cards adjacent to the card numbered `id`.
    ///
    /// Fails with `InvalidPlaceCardNumber` if `id` is outside `1..=10`, and
    /// with `CardNotFound` if no card on the map has that number.
    pub fn get_neighbors_by_id(&self, id: u8) -> Result<Neighbors<'_>> {
        if !(MIN_PLACE_NUMBER..=MAX_PLACE_NUMBER).contains(&id) {
            return Err(TopologyError::InvalidPlaceCardNumber(id));
        }
        let slot = self.slot_of(id)?;
        Ok(self
            .graph
            .neighbors(slot)
            .iter()
            .filter_map(|&neighbor| self.cards.get(neighbor))
            .collect())
    }

    /// Cards adjacent to `card`.
    pub fn get_neighbors(&self, card: &MapPlaceCard) -> Result<Neighbors<'_>> {
        self.get_neighbors_by_id(card.number())
    }

    /// Whether the cards numbered `a` and `b` sit in adjacent slots.
    pub fn are_adjacent(&self, a: u8, b: u8) -> Result<bool> {
        let slot_a = self.slot_of(a)?;
        let slot_b = self.slot_of(b)?;
        Ok(self.graph.are_adjacent(slot_a, slot_b))
    }
}
