// Integration tests for the board arena and partner selection.

use glam::Vec2;
use quark_core::*;

fn up() -> Label {
    Label::quark(Flavor::Up)
}

fn down() -> Label {
    Label::quark(Flavor::Down)
}

#[test]
fn spawn_creates_single_constituents_with_fresh_ids() {
    let mut board = Board::default();
    let a = board.spawn_constituent(up());
    let b = board.spawn_constituent(up());
    assert_ne!(a, b);
    assert_eq!(board.len(), 2);
    assert_eq!(board.composition(a).unwrap().len(), 1);
    assert_eq!(board.multi_constituent_count(), 0);
}

#[test]
fn merge_replaces_inputs_with_result() {
    let mut board = Board::default();
    let a = board.spawn_constituent(up());
    let b = board.spawn_constituent(Label::antiquark(Flavor::Down));
    let keep = board.spawn_constituent(down());

    let (merged, outcome) = board.merge(a, b).unwrap();
    assert_eq!(outcome.display_name, "π+");
    assert!(!board.contains(a));
    assert!(!board.contains(b));
    assert!(board.contains(keep));
    assert_eq!(board.ids().collect::<Vec<_>>(), vec![keep, merged]);
    assert_eq!(board.get(merged).unwrap().class.style_tag, Some("pi-plus"));
    assert_eq!(board.multi_constituent_count(), 1);
}

#[test]
fn failed_merge_leaves_board_untouched() {
    let mut board = Board::default();
    let mut big = board.spawn_constituent(up());
    for _ in 0..4 {
        let q = board.spawn_constituent(up());
        big = board.merge(big, q).unwrap().0;
    }
    assert_eq!(board.composition(big).unwrap().len(), 5);

    let lone = board.spawn_constituent(down());
    let before: Vec<_> = board.ids().collect();
    let err = board.merge(lone, big).unwrap_err();
    assert!(matches!(err, MergeError::TooManyConstituents { total: 6, max: 5 }));
    assert_eq!(board.ids().collect::<Vec<_>>(), before);
}

#[test]
fn merge_rejects_self_and_missing_ids() {
    let mut board = Board::default();
    let a = board.spawn_constituent(up());
    assert_eq!(board.merge(a, a).unwrap_err(), MergeError::SameEntity);

    let ghost = EntityId::from_raw(999);
    assert_eq!(board.merge(a, ghost).unwrap_err(), MergeError::UnknownEntity(ghost));
    assert_eq!(board.len(), 1);
}

#[test]
fn population_limit_counts_groups_on_board() {
    let mut board = Board::new(Registry::builtin(), MergeRules::default().with_population_limit(2));
    for _ in 0..2 {
        let a = board.spawn_constituent(up());
        let b = board.spawn_constituent(down());
        board.merge(a, b).unwrap();
    }
    assert_eq!(board.multi_constituent_count(), 2);

    let a = board.spawn_constituent(up());
    let b = board.spawn_constituent(down());
    assert_eq!(
        board.merge(a, b).unwrap_err(),
        MergeError::PopulationLimitReached { limit: 2 }
    );

    // a lone quark may still join an existing group
    let group = board.entities().iter().find(|e| e.is_multi()).unwrap().id;
    assert!(board.merge(a, group).is_ok());
}

#[test]
fn clear_all_discards_everything() {
    let mut board = Board::default();
    let first = board.spawn_constituent(up());
    board.spawn_constituent(down());
    board.clear_all();
    assert!(board.is_empty());
    let next = board.spawn_constituent(up());
    assert!(next > first);
}

#[test]
fn remove_drops_one_entity() {
    let mut board = Board::default();
    let a = board.spawn_constituent(up());
    let b = board.spawn_constituent(down());
    assert_eq!(board.remove(a).map(|e| e.id), Some(a));
    assert!(board.remove(a).is_none());
    assert_eq!(board.ids().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn first_match_takes_scan_order_not_distance() {
    let released = EntityId::from_raw(1);
    let far = EntityId::from_raw(2);
    let near = EntityId::from_raw(3);
    let candidates = [
        (released, Vec2::ZERO),
        (far, Vec2::new(40.0, 0.0)),
        (near, Vec2::new(5.0, 0.0)),
    ];
    let first = find_partner(
        released,
        Vec2::ZERO,
        candidates,
        MERGE_DISTANCE,
        SelectionStrategy::FirstWithinThreshold,
    );
    assert_eq!(first, Some(far));

    let nearest = find_partner(
        released,
        Vec2::ZERO,
        candidates,
        MERGE_DISTANCE,
        SelectionStrategy::NearestWithinThreshold,
    );
    assert_eq!(nearest, Some(near));
}

#[test]
fn nearest_ties_keep_scan_order() {
    let released = EntityId::from_raw(1);
    let left = EntityId::from_raw(2);
    let right = EntityId::from_raw(3);
    let candidates = [(left, Vec2::new(-20.0, 0.0)), (right, Vec2::new(20.0, 0.0))];
    assert_eq!(
        find_partner(released, Vec2::ZERO, candidates, MERGE_DISTANCE, SelectionStrategy::NearestWithinThreshold),
        Some(left)
    );
    let swapped = [(right, Vec2::new(20.0, 0.0)), (left, Vec2::new(-20.0, 0.0))];
    assert_eq!(
        find_partner(released, Vec2::ZERO, swapped, MERGE_DISTANCE, SelectionStrategy::NearestWithinThreshold),
        Some(right)
    );
}

#[test]
fn threshold_is_strict() {
    let released = EntityId::from_raw(1);
    let other = EntityId::from_raw(2);
    let at_edge = [(other, Vec2::new(30.0, 40.0))]; // distance exactly 50
    for strategy in [
        SelectionStrategy::FirstWithinThreshold,
        SelectionStrategy::NearestWithinThreshold,
    ] {
        assert_eq!(
            find_partner(released, Vec2::ZERO, at_edge, MERGE_DISTANCE, strategy),
            None
        );
    }
    let inside = [(other, Vec2::new(30.0, 39.9))];
    assert_eq!(
        find_partner(released, Vec2::ZERO, inside, MERGE_DISTANCE, SelectionStrategy::default()),
        Some(other)
    );
}

#[test]
fn no_partner_when_alone() {
    let released = EntityId::from_raw(7);
    let only_self = [(released, Vec2::new(1.0, 1.0))];
    assert_eq!(
        find_partner(released, Vec2::new(1.0, 1.0), only_self, MERGE_DISTANCE, SelectionStrategy::default()),
        None
    );
}

#[test]
fn merged_particle_sits_at_midpoint() {
    assert_eq!(midpoint(Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)), Vec2::new(5.0, 10.0));
}

#[test]
fn strategy_names_parse() {
    assert_eq!(SelectionStrategy::from_name("nearest"), Some(SelectionStrategy::NearestWithinThreshold));
    assert_eq!(SelectionStrategy::from_name("first"), Some(SelectionStrategy::FirstWithinThreshold));
    assert_eq!(SelectionStrategy::from_name("random"), None);
}
