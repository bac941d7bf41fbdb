use crate::config::RematchConfig;
use crate::rematch::{
    rematch_candidates, rematch_tier, select_rematch, update_gym_leader_rematch,
    update_unlocked_rematches_from_badges, GymLeader, RematchSelection, RematchUnlocks,
};
use crate::state::{Flag, GameState, Var};
use crate::tests::common::seeded_rng;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Mark the first `tier` battles of `leader`'s ladder as won.
fn beat_ladder(state: &mut GameState, leader: GymLeader, tier: usize) {
    for &trainer in leader.rematch_trainers().iter().take(tier) {
        state.record_trainer_defeated(trainer);
    }
}

fn state_with_badges(badges: usize) -> GameState {
    let mut state = GameState::new();
    for &flag in Flag::BADGES.iter().take(badges) {
        state.flag_set(flag);
    }
    state
}

fn three_leader_state() -> GameState {
    let mut state = GameState::new();
    beat_ladder(&mut state, GymLeader::Roxanne, 2);
    beat_ladder(&mut state, GymLeader::Brawly, 2);
    beat_ladder(&mut state, GymLeader::Wattson, 3);
    state
}

const THREE_LEADERS: RematchUnlocks = RematchUnlocks::ROXANNE
    .union(RematchUnlocks::BRAWLY)
    .union(RematchUnlocks::WATTSON);

#[rstest]
#[case("no badges", 0, RematchUnlocks::empty())]
#[case("first badge only", 1, RematchUnlocks::empty())]
#[case("second badge", 2, RematchUnlocks::ROXANNE)]
#[case(
    "fifth badge",
    5,
    RematchUnlocks::ROXANNE
        .union(RematchUnlocks::BRAWLY)
        .union(RematchUnlocks::WATTSON)
        .union(RematchUnlocks::FLANNERY)
)]
#[case("all badges", 8, RematchUnlocks::all())]
fn test_fresh_save_backfills_unlocks(
    #[case] desc: &str,
    #[case] badges: usize,
    #[case] expected: RematchUnlocks,
) {
    let mut state = state_with_badges(badges);
    assert_eq!(update_unlocked_rematches_from_badges(&mut state), expected, "{}", desc);
    assert_eq!(state.var_get(Var::GymRematchUnlockMask), expected.bits() as u16);
}

#[test]
fn test_rematch_tier_counts_leading_wins() {
    let mut state = GameState::new();
    assert_eq!(rematch_tier(&state, GymLeader::Norman), 0);

    beat_ladder(&mut state, GymLeader::Norman, 3);
    assert_eq!(rematch_tier(&state, GymLeader::Norman), 3);

    beat_ladder(&mut state, GymLeader::Norman, 5);
    assert_eq!(rematch_tier(&state, GymLeader::Norman), 5);
}

#[test]
fn test_rematch_tier_stops_at_first_gap() {
    let mut state = GameState::new();
    let ladder = GymLeader::Winona.rematch_trainers();
    state.record_trainer_defeated(ladder[0]);
    state.record_trainer_defeated(ladder[2]);
    assert_eq!(rematch_tier(&state, GymLeader::Winona), 1);
}

#[test]
fn test_selection_picks_lowest_tier_only() {
    for seed in 0..200 {
        let mut state = three_leader_state();
        let mut rng = seeded_rng(seed);
        let selection = select_rematch(&mut state, THREE_LEADERS, 5, &mut rng).unwrap();

        assert_eq!(selection.tier, 2);
        assert_ne!(selection.leader, GymLeader::Wattson);
        assert_eq!(state.trainer_rematches[selection.leader.rematch_id()], 2);
        assert_eq!(state.trainer_rematches[GymLeader::Wattson.rematch_id()], 0);
    }
}

#[test]
fn test_selection_is_uniform_among_ties() {
    let mut rng = seeded_rng(2024);
    let trials = 4000;
    let mut roxanne = 0;

    for _ in 0..trials {
        let mut state = three_leader_state();
        match select_rematch(&mut state, THREE_LEADERS, 5, &mut rng) {
            Some(RematchSelection {
                leader: GymLeader::Roxanne,
                ..
            }) => roxanne += 1,
            Some(RematchSelection {
                leader: GymLeader::Brawly,
                ..
            }) => {}
            other => panic!("unexpected selection {:?}", other),
        }
    }

    let share = roxanne as f64 / trials as f64;
    assert!((0.45..=0.55).contains(&share), "Roxanne chosen {:.3} of the time", share);
}

#[test]
fn test_selection_respects_max_tier() {
    let mut state = GameState::new();
    beat_ladder(&mut state, GymLeader::Roxanne, 2);
    beat_ladder(&mut state, GymLeader::Brawly, 2);
    let before = state.trainer_rematches.clone();

    let mut rng = seeded_rng(1);
    let unlocked = RematchUnlocks::ROXANNE | RematchUnlocks::BRAWLY;
    assert_eq!(select_rematch(&mut state, unlocked, 1, &mut rng), None);
    assert_eq!(state.trainer_rematches, before);
}

#[test]
fn test_selection_skips_already_queued_leaders() {
    let mut state = GameState::new();
    beat_ladder(&mut state, GymLeader::Roxanne, 1);
    beat_ladder(&mut state, GymLeader::Brawly, 1);
    state.trainer_rematches[GymLeader::Roxanne.rematch_id()] = 1;
    state.trainer_rematches[GymLeader::Brawly.rematch_id()] = 1;
    let before = state.trainer_rematches.clone();

    let unlocked = RematchUnlocks::ROXANNE | RematchUnlocks::BRAWLY;
    assert!(rematch_candidates(&state, unlocked).is_empty());

    let mut rng = seeded_rng(1);
    assert_eq!(select_rematch(&mut state, unlocked, 1, &mut rng), None);
    assert_eq!(state.trainer_rematches, before);
}

#[test]
fn test_selection_with_nothing_unlocked() {
    let mut state = three_leader_state();
    let mut rng = seeded_rng(1);
    assert_eq!(
        select_rematch(&mut state, RematchUnlocks::empty(), 5, &mut rng),
        None
    );
}

#[test]
fn test_update_before_game_clear_queues_first_tier() {
    let mut state = state_with_badges(3);
    beat_ladder(&mut state, GymLeader::Roxanne, 1);
    beat_ladder(&mut state, GymLeader::Brawly, 1);
    let mut rng = seeded_rng(9);

    let selection = update_gym_leader_rematch(&mut state, &RematchConfig::default(), &mut rng)
        .expect("one leader should be queued");
    assert_eq!(selection.tier, 1);
    assert!(matches!(
        selection.leader,
        GymLeader::Roxanne | GymLeader::Brawly
    ));
    assert_eq!(
        state.var_get(Var::GymRematchUnlockMask),
        (RematchUnlocks::ROXANNE | RematchUnlocks::BRAWLY).bits() as u16
    );
}

#[test]
fn test_update_after_game_clear_allows_higher_tiers() {
    let mut state = state_with_badges(8);
    state.flag_set(Flag::SysGameClear);
    for leader in GymLeader::ALL {
        beat_ladder(&mut state, leader, 3);
    }
    let mut rng = seeded_rng(4);

    let selection =
        update_gym_leader_rematch(&mut state, &RematchConfig::default(), &mut rng).unwrap();
    assert_eq!(selection.tier, 3);
    assert_eq!(state.trainer_rematches[selection.leader.rematch_id()], 3);

    // Same progress without the clear flag is capped at tier 1
    let mut uncleared = state_with_badges(8);
    for leader in GymLeader::ALL {
        beat_ladder(&mut uncleared, leader, 3);
    }
    assert_eq!(
        update_gym_leader_rematch(&mut uncleared, &RematchConfig::default(), &mut rng),
        None
    );
}

#[test]
fn test_update_uses_computed_mask_by_default() {
    let mut state = state_with_badges(8);
    for leader in GymLeader::ALL {
        beat_ladder(&mut state, leader, 1);
    }

    let mut chosen = std::collections::HashSet::new();
    for seed in 0..100 {
        let mut state = state.clone();
        let mut rng = seeded_rng(seed);
        let selection =
            update_gym_leader_rematch(&mut state, &RematchConfig::default(), &mut rng).unwrap();
        assert_eq!(selection.tier, 1);
        assert_eq!(
            state.var_get(Var::GymRematchUnlockMask),
            RematchUnlocks::all().bits() as u16
        );
        chosen.insert(selection.leader);
    }
    // Leaders beyond the first two are reachable without any override
    assert!(chosen.contains(&GymLeader::Juan) || chosen.contains(&GymLeader::TateAndLiza));
    assert!(chosen.len() > 2);
}

#[test]
fn test_forced_unlock_override() {
    let mut state = state_with_badges(8);
    for leader in GymLeader::ALL {
        beat_ladder(&mut state, leader, 1);
    }
    let config = RematchConfig {
        forced_unlock_mask: Some((RematchUnlocks::ROXANNE | RematchUnlocks::BRAWLY).bits()),
        ..RematchConfig::default()
    };

    for seed in 0..50 {
        let mut state = state.clone();
        let mut rng = seeded_rng(seed);
        let selection = update_gym_leader_rematch(&mut state, &config, &mut rng).unwrap();
        assert!(matches!(
            selection.leader,
            GymLeader::Roxanne | GymLeader::Brawly
        ));
        // The persisted mask still reflects real progress
        assert_eq!(
            state.var_get(Var::GymRematchUnlockMask),
            RematchUnlocks::all().bits() as u16
        );
    }
}

#[test]
fn test_tier_zero_selection_leaves_table_unqueued() {
    let mut state = state_with_badges(2);
    let mut rng = seeded_rng(4);

    let selection = update_gym_leader_rematch(&mut state, &RematchConfig::default(), &mut rng);
    assert_eq!(
        selection,
        Some(RematchSelection {
            leader: GymLeader::Roxanne,
            tier: 0
        })
    );
    assert_eq!(state.trainer_rematches[GymLeader::Roxanne.rematch_id()], 0);

    // Still a candidate on the next update since nothing was queued
    let again = update_gym_leader_rematch(&mut state, &RematchConfig::default(), &mut rng);
    assert_eq!(again.map(|s| s.tier), Some(0));
}
