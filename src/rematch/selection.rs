use super::{GymLeader, RematchUnlocks, REMATCH_LADDER_LEN};
use crate::state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The leader queued by [`select_rematch`] and the tier written for it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RematchSelection {
    pub leader: GymLeader,
    pub tier: u8,
}

/// How far up its ladder a leader has been beaten: the number of leading
/// ladder battles already won, capped at the ladder length.
pub fn rematch_tier(state: &GameState, leader: GymLeader) -> u8 {
    leader
        .rematch_trainers()
        .iter()
        .position(|&trainer| !state.has_trainer_been_fought(trainer))
        .unwrap_or(REMATCH_LADDER_LEN) as u8
}

/// Unlocked leaders with nothing queued yet, paired with their current tier.
pub fn rematch_candidates(state: &GameState, unlocked: RematchUnlocks) -> Vec<(GymLeader, u8)> {
    GymLeader::unlocked(unlocked)
        .filter(|leader| {
            state
                .trainer_rematches
                .get(leader.rematch_id())
                .is_some_and(|&queued| queued == 0)
        })
        .map(|leader| (leader, rematch_tier(state, leader)))
        .collect()
}

/// Queue one rematch among the unlocked leaders at the lowest tier.
///
/// A tier-0 pick leaves the table entry at 0, i.e. unqueued.
///
/// Ties are broken uniformly at random so no leader is favoured. Nothing is
/// queued when there are no candidates or the lowest tier exceeds `max_tier`.
pub fn select_rematch(
    state: &mut GameState,
    unlocked: RematchUnlocks,
    max_tier: u8,
    rng: &mut impl Rng,
) -> Option<RematchSelection> {
    let candidates = rematch_candidates(state, unlocked);
    let lowest_tier = candidates.iter().map(|&(_, tier)| tier).min()?;
    if lowest_tier > max_tier {
        return None;
    }

    let lowest: Vec<GymLeader> = candidates
        .into_iter()
        .filter(|&(_, tier)| tier == lowest_tier)
        .map(|(leader, _)| leader)
        .collect();

    let leader = lowest[rng.random_range(0..lowest.len())];
    state.trainer_rematches[leader.rematch_id()] = lowest_tier;

    Some(RematchSelection {
        leader,
        tier: lowest_tier,
    })
}
