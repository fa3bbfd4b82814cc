//! Movement tracks.
//!
//! A track is an ordered run of positions stored contiguously: slot `i`
//! holds the position valued `i` in a constructed track, its successor is
//! slot `i + 1` and its predecessor slot `i - 1`. Two tracks (or two
//! suffixes of tracks) are equal when their whole ordered content is equal.
//!
//! ```
//! use not_alone::board::{Layout, RescueTrack, TrackPosition};
//!
//! let track = RescueTrack::construct(4, Layout::Stacked).unwrap();
//! assert_eq!(track.len(), 15);
//! assert!(track.get_position(14).unwrap().is_artemia());
//! assert_eq!(track.next(3).unwrap().map(|p| p.value()), Some(4));
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use super::layout::{Layout, RescueKind};
use super::position::{AssimilationPosition, RescuePosition, TrackKind, TrackPosition};
use crate::core::error::{Result, TopologyError};
use crate::core::PlayerCount;

/// Ordered positions of one team's track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Track<P: TrackPosition> {
    player_count: PlayerCount,
    layout: Layout,
    positions: Vec<P>,
}

/// Track of the Creature.
pub type AssimilationTrack = Track<AssimilationPosition>;

/// Track of the hunted players.
pub type RescueTrack = Track<RescuePosition>;

impl<P: TrackPosition> Track<P> {
    /// Length of a full track of this kind for `player_count` players.
    #[must_use]
    pub fn length_for(player_count: PlayerCount) -> usize {
        P::BASE_LENGTH + player_count.get()
    }

    /// Create a track with no positions, to be filled with [`Track::append`].
    #[must_use]
    pub fn empty(player_count: PlayerCount, layout: Layout) -> Self {
        Self {
            player_count,
            layout,
            positions: Vec::new(),
        }
    }

    /// Build a fully populated track.
    ///
    /// The player count is validated before any position is created, and
    /// every position is created before the track is returned, so callers
    /// only ever observe complete tracks.
    pub fn construct(player_count: usize, layout: Layout) -> Result<Self> {
        let player_count = PlayerCount::new(player_count)?;
        Self::construct_for(player_count, layout)
    }

    /// Build a fully populated track for an already validated player count.
    pub fn construct_for(player_count: PlayerCount, layout: Layout) -> Result<Self> {
        let len = Self::length_for(player_count);
        let positions = (0..len)
            .map(|slot| P::for_slot(slot, player_count, layout, len))
            .collect::<Result<Vec<_>>>()?;

        let kind = P::KIND;
        debug!(track = %kind, %player_count, %layout, len, "Track constructed");
        Ok(Self {
            player_count,
            layout,
            positions,
        })
    }

    /// Link `position` as the new tail.
    ///
    /// The position's value was range-checked when it was created, so
    /// appending cannot fail.
    pub fn append(&mut self, position: P) {
        let kind = P::KIND;
        trace!(track = %kind, value = position.value(), "Position appended");
        self.positions.push(position);
    }

    /// Find the first position whose value is `id`, scanning from the head.
    ///
    /// Every position is checked, including the tail.
    pub fn get_position(&self, id: u8) -> Result<&P> {
        self.positions
            .iter()
            .find(|p| p.value() == id)
            .ok_or(TopologyError::PositionNotFound(id))
    }

    /// Slot index of the position valued `id`.
    pub fn index_of(&self, id: u8) -> Result<usize> {
        self.positions
            .iter()
            .position(|p| p.value() == id)
            .ok_or(TopologyError::PositionNotFound(id))
    }

    /// Position following the one valued `id`; `None` at the tail.
    pub fn next(&self, id: u8) -> Result<Option<&P>> {
        let index = self.index_of(id)?;
        Ok(self.positions.get(index + 1))
    }

    /// Position preceding the one valued `id`; `None` at the head.
    pub fn previous(&self, id: u8) -> Result<Option<&P>> {
        let index = self.index_of(id)?;
        Ok(index.checked_sub(1).and_then(|i| self.positions.get(i)))
    }

    /// Position stored at slot `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<&P> {
        self.positions.get(index)
    }

    /// The chain of positions starting at slot `index`.
    ///
    /// Comparing suffixes compares a position together with everything
    /// downstream of it.
    #[must_use]
    pub fn suffix(&self, index: usize) -> &[P] {
        self.positions.get(index..).unwrap_or(&[])
    }

    /// First position, `None` if the track is empty.
    #[must_use]
    pub fn head(&self) -> Option<&P> {
        self.positions.first()
    }

    /// Last position, `None` if the track is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&P> {
        self.positions.last()
    }

    /// Get the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the track has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.positions.iter()
    }

    /// Get all positions, head first.
    #[must_use]
    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    /// Get the player count the track was built for.
    #[must_use]
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    /// Get the board side the track was built for.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Get which track this is.
    #[must_use]
    pub fn kind(&self) -> TrackKind {
        P::KIND
    }
}

impl AssimilationTrack {
    /// Create an assimilation position valued `id` and append it.
    pub fn append_by_id(&mut self, id: u8) -> Result<()> {
        let position = AssimilationPosition::new(id)?;
        self.append(position);
        Ok(())
    }
}

impl RescueTrack {
    /// Create a rescue position valued `id` of the given kind and append it.
    pub fn append_by_id(&mut self, id: u8, kind: RescueKind) -> Result<()> {
        let position = RescuePosition::new(id, kind)?;
        self.append(position);
        Ok(())
    }

    /// Number of Artemia spots on this track.
    #[must_use]
    pub fn artemia_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_artemia()).count()
    }
}

impl<'a, P: TrackPosition> IntoIterator for &'a Track<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> PlayerCount {
        PlayerCount::new(4).unwrap()
    }

    #[test]
    fn test_lengths() {
        for count in PlayerCount::all() {
            assert_eq!(AssimilationTrack::length_for(count), 5 + count.get());
            assert_eq!(RescueTrack::length_for(count), 11 + count.get());
        }
    }

    #[test]
    fn test_construct_rejects_player_count() {
        assert_eq!(
            RescueTrack::construct(1, Layout::Stacked),
            Err(TopologyError::InvalidPlayerCount(1))
        );
        assert_eq!(
            AssimilationTrack::construct(8, Layout::Alternating),
            Err(TopologyError::InvalidPlayerCount(8))
        );
    }

    #[test]
    fn test_construct_values_are_contiguous() {
        let track = RescueTrack::construct(7, Layout::Alternating).unwrap();
        let values: Vec<u8> = track.iter().map(TrackPosition::value).collect();
        assert_eq!(values, (0..18).collect::<Vec<u8>>());
    }

    #[test]
    fn test_construct_matches_manual_build() {
        let track = RescueTrack::construct(4, Layout::Stacked).unwrap();

        let mut expected = RescueTrack::empty(four(), Layout::Stacked);
        for i in 0..15 {
            let kind = if i < 9 { RescueKind::Regular } else { RescueKind::Artemia };
            expected.append_by_id(i, kind).unwrap();
        }
        assert_eq!(track, expected);
    }

    #[test]
    fn test_append_by_id_rejects_without_mutation() {
        let mut track = AssimilationTrack::empty(four(), Layout::Stacked);
        track.append_by_id(0).unwrap();

        assert!(track.append_by_id(12).is_err());
        assert_eq!(track.len(), 1);

        let mut rescue = RescueTrack::empty(four(), Layout::Stacked);
        assert!(rescue.append_by_id(18, RescueKind::Artemia).is_err());
        assert!(rescue.is_empty());
    }

    #[test]
    fn test_get_position_finds_tail() {
        let track = AssimilationTrack::construct(4, Layout::Stacked).unwrap();
        assert_eq!(track.get_position(0).map(TrackPosition::value), Ok(0));
        assert_eq!(track.get_position(8).map(TrackPosition::value), Ok(8));
        assert_eq!(track.get_position(9), Err(TopologyError::PositionNotFound(9)));
    }

    #[test]
    fn test_get_position_single_element() {
        let mut track = AssimilationTrack::empty(four(), Layout::Stacked);
        track.append_by_id(0).unwrap();
        assert!(track.get_position(0).is_ok());
    }

    #[test]
    fn test_next_and_previous() {
        let track = AssimilationTrack::construct(2, Layout::Stacked).unwrap();

        assert_eq!(track.next(0).unwrap().map(TrackPosition::value), Some(1));
        assert_eq!(track.next(6).unwrap(), None);
        assert_eq!(track.previous(0).unwrap(), None);
        assert_eq!(track.previous(6).unwrap().map(TrackPosition::value), Some(5));
        assert_eq!(track.next(7), Err(TopologyError::PositionNotFound(7)));
    }

    #[test]
    fn test_head_tail() {
        let track = RescueTrack::construct(3, Layout::Stacked).unwrap();
        assert_eq!(track.head().map(TrackPosition::value), Some(0));
        assert_eq!(track.tail().map(TrackPosition::value), Some(13));
        assert_eq!(track.position_at(5).map(TrackPosition::value), Some(5));
        assert_eq!(track.position_at(14), None);

        let empty = RescueTrack::empty(four(), Layout::Stacked);
        assert_eq!(empty.head(), None);
        assert_eq!(empty.tail(), None);
    }

    #[test]
    fn test_suffix_equality() {
        // Same value and kind at slot 0, different downstream chain.
        let mut a = RescueTrack::empty(four(), Layout::Stacked);
        a.append_by_id(3, RescueKind::Artemia).unwrap();
        a.append_by_id(0, RescueKind::Regular).unwrap();

        let mut b = RescueTrack::empty(four(), Layout::Stacked);
        b.append_by_id(3, RescueKind::Artemia).unwrap();
        b.append_by_id(0, RescueKind::Regular).unwrap();

        let mut c = RescueTrack::empty(four(), Layout::Stacked);
        c.append_by_id(3, RescueKind::Artemia).unwrap();
        c.append_by_id(0, RescueKind::Artemia).unwrap();

        assert_eq!(a.suffix(0), b.suffix(0));
        assert_ne!(a.suffix(0), c.suffix(0));
        assert_eq!(a.position_at(0), c.position_at(0));
        assert!(a.suffix(5).is_empty());
    }

    #[test]
    fn test_artemia_count() {
        for count in PlayerCount::all() {
            let stacked = RescueTrack::construct_for(count, Layout::Stacked).unwrap();
            assert_eq!(stacked.artemia_count(), 6);

            let alternating = RescueTrack::construct_for(count, Layout::Alternating).unwrap();
            assert_eq!(alternating.artemia_count(), 6);
        }
    }

    #[test]
    fn test_kind() {
        let track = AssimilationTrack::construct(5, Layout::Alternating).unwrap();
        assert_eq!(track.kind(), TrackKind::Assimilation);
        assert_eq!(track.layout(), Layout::Alternating);
        assert_eq!(track.player_count().get(), 5);
    }
}
