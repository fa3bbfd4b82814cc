//! Track and board construction tests.
//!
//! These mirror how a game sets up its board:
//! - Track lengths and position values for every player count
//! - Artemia spot placement on both board sides
//! - Board-level validation

use not_alone::board::{
    AssimilationTrack, Board, Layout, RescueKind, RescueTrack, TrackPosition,
};
use not_alone::core::{PlayerCount, SetupConfig, TopologyError};
use proptest::prelude::*;

/// Build the stacked rescue track by hand and compare it with the constructed one.
#[test]
fn test_track_construction_stacked_board() {
    for count in PlayerCount::all() {
        let players = count.get();

        let track = RescueTrack::construct(players, Layout::Stacked).unwrap();
        let mut expected = RescueTrack::empty(count, Layout::Stacked);
        for i in 0..(11 + players) as u8 {
            let kind = if (i as usize) < 5 + players {
                RescueKind::Regular
            } else {
                RescueKind::Artemia
            };
            expected.append_by_id(i, kind).unwrap();
        }
        assert_eq!(track, expected, "{players} players");

        let track = AssimilationTrack::construct(players, Layout::Stacked).unwrap();
        let mut expected = AssimilationTrack::empty(count, Layout::Stacked);
        for i in 0..(5 + players) as u8 {
            expected.append_by_id(i).unwrap();
        }
        assert_eq!(track, expected, "{players} players");
    }
}

/// Alternating side: regular up to `player_count - 1`, then alternating by parity.
#[test]
fn test_track_construction_alternating_board() {
    for count in PlayerCount::all() {
        let players = count.get();

        let track = RescueTrack::construct(players, Layout::Alternating).unwrap();
        let mut expected = RescueTrack::empty(count, Layout::Alternating);
        for i in 0..(11 + players) as u8 {
            let slot = i as usize;
            let kind = if slot < players - 1 || (slot + players) % 2 != 0 {
                RescueKind::Regular
            } else {
                RescueKind::Artemia
            };
            expected.append_by_id(i, kind).unwrap();
        }
        assert_eq!(track, expected, "{players} players");
    }
}

#[test]
fn test_alternating_four_players_kinds() {
    let track = RescueTrack::construct(4, Layout::Alternating).unwrap();
    let kinds: Vec<RescueKind> = track.iter().map(|p| p.kind()).collect();

    use RescueKind::{Artemia as A, Regular as R};
    assert_eq!(kinds, vec![R, R, R, R, A, R, A, R, A, R, A, R, A, R, A]);
}

#[test]
fn test_board_initialization() {
    let board = Board::new(4, Layout::Stacked).unwrap();

    assert_eq!(board.player_count().get(), 4);
    assert_eq!(board.layout(), Layout::Stacked);
    assert_eq!(board.assimilation_track_length(), 9);
    assert_eq!(board.rescue_track_length(), 15);
}

#[test]
fn test_board_rejects_player_counts() {
    for count in [1, 35, 10, 8] {
        assert_eq!(
            Board::new(count, Layout::Alternating).err(),
            Some(TopologyError::InvalidPlayerCount(count))
        );
    }
}

#[test]
fn test_get_position_reaches_every_slot() {
    let board = Board::stacked(7).unwrap();
    let rescue = board.rescue_track();

    for id in 0..18u8 {
        assert_eq!(rescue.get_position(id).map(|p| p.value()), Ok(id));
    }
    assert_eq!(rescue.get_position(18), Err(TopologyError::PositionNotFound(18)));
}

#[test]
fn test_walk_track_forward_and_back() {
    let board = Board::stacked(2).unwrap();
    let track = board.assimilation_track();

    let mut forward = vec![track.head().unwrap().value()];
    while let Some(next) = track.next(*forward.last().unwrap()).unwrap() {
        forward.push(next.value());
    }
    assert_eq!(forward, (0..7).collect::<Vec<u8>>());

    let mut backward = vec![track.tail().unwrap().value()];
    while let Some(previous) = track.previous(*backward.last().unwrap()).unwrap() {
        backward.push(previous.value());
    }
    assert_eq!(backward, (0..7).rev().collect::<Vec<u8>>());
}

#[test]
fn test_board_from_json_config() {
    let config: SetupConfig =
        serde_json::from_str(r#"{"player_count": 5, "layout": "ALTERNATING"}"#).unwrap();
    let board = config.build_board().unwrap();

    assert_eq!(board.rescue_track_length(), 16);
    assert_eq!(board.rescue_track().artemia_count(), 6);
}

#[test]
fn test_board_serializes() {
    let board = Board::stacked(2).unwrap();
    let json = serde_json::to_value(&board).unwrap();

    assert_eq!(json["player_count"], 2);
    assert_eq!(json["layout"], "STACKED");
    assert_eq!(json["rescue_track"]["positions"][12]["kind"], "ARTEMIA");
    assert_eq!(json["assimilation_track"]["positions"].as_array().map(Vec::len), Some(7));
}

fn layouts() -> impl Strategy<Value = Layout> {
    prop_oneof![Just(Layout::Stacked), Just(Layout::Alternating)]
}

proptest! {
    #[test]
    fn prop_track_shape(players in 2usize..=7, layout in layouts()) {
        let board = Board::new(players, layout).unwrap();

        prop_assert_eq!(board.rescue_track().len(), 11 + players);
        prop_assert_eq!(board.assimilation_track().len(), 5 + players);

        let rescue: Vec<u8> = board.rescue_track().iter().map(|p| p.value()).collect();
        prop_assert_eq!(rescue, (0..(11 + players) as u8).collect::<Vec<u8>>());

        let assimilation: Vec<u8> = board.assimilation_track().iter().map(|p| p.value()).collect();
        prop_assert_eq!(assimilation, (0..(5 + players) as u8).collect::<Vec<u8>>());
    }

    #[test]
    fn prop_stacked_artemia_at_end(players in 2usize..=7) {
        let track = RescueTrack::construct(players, Layout::Stacked).unwrap();
        let len = track.len();
        for (i, position) in track.iter().enumerate() {
            prop_assert_eq!(position.is_artemia(), i >= len - 6);
        }
    }

    #[test]
    fn prop_invalid_player_count(players in 8usize..1000) {
        prop_assert_eq!(
            Board::stacked(players).err(),
            Some(TopologyError::InvalidPlayerCount(players))
        );
    }
}
