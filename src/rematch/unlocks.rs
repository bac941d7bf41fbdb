use super::RematchUnlocks;
use crate::state::{Flag, GameState, Var};
use tracing::info;

/// Leaders unlocked when the badge count reaches each value.
///
/// Beating the next gym unlocks the previous leader; Juan unlocks together with
/// Tate & Liza on the eighth badge.
pub const BADGE_UNLOCKS: [(u8, RematchUnlocks); 7] = [
    (2, RematchUnlocks::ROXANNE),
    (3, RematchUnlocks::BRAWLY),
    (4, RematchUnlocks::WATTSON),
    (5, RematchUnlocks::FLANNERY),
    (6, RematchUnlocks::NORMAN),
    (7, RematchUnlocks::WINONA),
    (8, RematchUnlocks::TATE_LIZA.union(RematchUnlocks::JUAN)),
];

pub fn badge_count(state: &GameState) -> u8 {
    Flag::BADGES
        .iter()
        .filter(|&&flag| state.flag_get(flag))
        .count() as u8
}

/// Leaders unlocked by reaching exactly `badges` badges
pub fn unlocks_for_badge_count(badges: u8) -> RematchUnlocks {
    BADGE_UNLOCKS
        .iter()
        .find(|(threshold, _)| *threshold == badges)
        .map(|(_, unlocks)| *unlocks)
        .unwrap_or_else(RematchUnlocks::empty)
}

/// Union of every unlock for badge counts in `(from, to]`
pub fn unlocks_between(from: u8, to: u8) -> RematchUnlocks {
    BADGE_UNLOCKS
        .iter()
        .filter(|(threshold, _)| *threshold > from && *threshold <= to)
        .fold(RematchUnlocks::empty(), |mask, (_, unlocks)| mask | *unlocks)
}

/// Fold newly earned badges into the persisted unlock mask and return it.
///
/// The mask only ever gains bits and the stored badge count never decreases.
pub fn update_unlocked_rematches_from_badges(state: &mut GameState) -> RematchUnlocks {
    let badges = badge_count(state);
    let last_badges = state.var_get(Var::GymRematchLastBadges);
    let stored = state.var_get(Var::GymRematchUnlockMask);
    let mask = RematchUnlocks::from_bits_retain(stored as u8);

    if last_badges == 0 && mask.is_empty() && badges >= 2 {
        // First run on an existing save: backfill everything earned so far
        let mask = unlocks_between(0, badges);
        info!(badges, ?mask, "backfilled gym rematch unlocks");
        persist(state, badges, mask);
        return mask;
    }

    if badges as u16 <= last_badges {
        return mask;
    }

    let mut updated = mask;
    for reached in (last_badges as u8 + 1)..=badges {
        updated |= unlocks_for_badge_count(reached);
    }

    if updated != mask {
        info!(badges, newly_unlocked = ?(updated - mask), "gym rematches unlocked");
    }
    persist(state, badges, updated);
    updated
}

fn persist(state: &mut GameState, badges: u8, mask: RematchUnlocks) {
    state.var_set(Var::GymRematchLastBadges, badges as u16);
    state.var_set(Var::GymRematchUnlockMask, mask.bits() as u16);
}
