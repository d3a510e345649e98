use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use spin_match::sim::{
    ColorSampler, DifficultyCurve, Hsv, Outcome, Player, Rotation, Side, Turn, classify,
    dir_to_facing, easing,
};
use spin_match::wrap_degrees;

const DURATION: f32 = 0.05;

fn player(seed: u64, slots: usize) -> Player {
    let mut rng = Pcg32::seed_from_u64(seed);
    let sampler = ColorSampler::new(0.75, 0.95);
    let mut player = Player::new(Vec2::splat(8.0), 1.0, 3, DURATION);
    for _ in 0..slots {
        player.add_slot(&sampler, &mut rng);
    }
    player
}

fn complete_turn(player: &mut Player, turn: Turn) {
    player.rotate(turn);
    while player.rotation().is_turning() {
        player.update(DURATION / 3.0);
    }
}

fn turn_strategy() -> impl Strategy<Value = Turn> {
    prop_oneof![Just(Turn::Left), Just(Turn::Right)]
}

proptest! {
    #[test]
    fn col_on_side_indexes_from_facing(seed in any::<u64>(), slots in 0usize..=4, turns in prop::collection::vec(turn_strategy(), 0..8)) {
        let mut p = player(seed, slots);
        for turn in turns {
            complete_turn(&mut p, turn);
        }
        for side in Side::ALL {
            let index = (side.index() as i32 - p.facing().index() as i32).rem_euclid(4) as usize;
            let expected = p.slots().get(index).map(|s| s.color).unwrap_or(Hsv::EMPTY);
            prop_assert_eq!(p.col_on_side(side), expected);
        }
    }

    #[test]
    fn right_turn_shifts_sides(seed in any::<u64>(), slots in 1usize..=4) {
        let mut p = player(seed, slots);
        let before: Vec<Hsv> = Side::ALL.iter().map(|&s| p.col_on_side(s)).collect();
        complete_turn(&mut p, Turn::Right);
        for side in Side::ALL {
            let prev = Side::from_index(side.index() as i32 - 1);
            prop_assert_eq!(p.col_on_side(side), before[prev.index()]);
        }
    }

    #[test]
    fn easing_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(easing(lo) <= easing(hi) + 1e-6);
        prop_assert!((0.0..=1.0 + 1e-6).contains(&easing(hi)));
    }

    #[test]
    fn second_rotate_is_ignored(first in turn_strategy(), second in turn_strategy(), dt in 0.0f32..0.04) {
        let mut p = player(1, 1);
        p.rotate(first);
        p.update(dt);
        p.rotate(second);
        let mut q = player(1, 1);
        q.rotate(first);
        q.update(dt);
        prop_assert_eq!(p.rotation(), q.rotation());
        match p.rotation() {
            Rotation::Turning { turn, .. } => prop_assert_eq!(turn, first),
            Rotation::Idle => prop_assert!(false, "turn should be in flight"),
        }
    }

    #[test]
    fn add_slot_caps_at_four(seed in any::<u64>(), extra in 0usize..6) {
        let p = player(seed, 4 + extra);
        prop_assert_eq!(p.num_slots(), 4);
    }

    #[test]
    fn adjacent_hues_are_distinct(seed in any::<u64>()) {
        let p = player(seed, 4);
        for pair in p.slots().windows(2) {
            let step = wrap_degrees(pair[1].color.h - pair[0].color.h);
            prop_assert!(step >= 60.0 - 1e-3 && step < 90.0 + 1e-3, "step {}", step);
        }
    }

    #[test]
    fn level_is_non_decreasing(a in -10.0f32..200.0, b in -10.0f32..200.0) {
        let curve = DifficultyCurve::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.level_for_duration(lo) <= curve.level_for_duration(hi));
        prop_assert!(curve.level_for_duration(hi) <= 6);
    }

    #[test]
    fn classification_survives_shared_hue_cycle(h1 in 0.0f32..360.0, h2 in 0.0f32..360.0, factor in -720.0f32..720.0) {
        let a = Hsv::new(h1, 0.75, 0.95);
        let b = Hsv::new(h2, 0.75, 0.95);
        prop_assert_eq!(classify(a, a), Some(Outcome::Match));
        prop_assert_eq!(classify(a.cycled(factor), a.cycled(factor)), Some(Outcome::Match));
        if h1 == h2 {
            prop_assert_eq!(classify(b.cycled(factor), a.cycled(factor)), Some(Outcome::Match));
        }
    }

    #[test]
    fn dir_to_facing_quadrants(angle in 0.0f32..360.0) {
        let expected = [Side::South, Side::East, Side::North, Side::West][(angle / 90.0) as usize];
        prop_assert_eq!(dir_to_facing(angle), expected);
    }
}

#[test]
fn easing_has_flat_endpoints() {
    let h = 1.0e-3;
    assert_eq!(easing(0.0), 0.0);
    assert_eq!(easing(1.0), 1.0);
    assert!((easing(h) - easing(0.0)) / h < 1.0e-2);
    assert!((easing(1.0) - easing(1.0 - h)) / h < 1.0e-2);
}

#[test]
fn level_boundaries() {
    let curve = DifficultyCurve::default();
    for (i, &t) in curve.thresholds.iter().enumerate() {
        assert_eq!(curve.level_for_duration(t - 1.0e-3), i);
        assert_eq!(curve.level_for_duration(t), i + 1);
    }
}
