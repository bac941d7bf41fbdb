//! Script specials: the entry points the event script engine calls by id.
//!
//! Specials take their arguments from and report through the special
//! variables on [`GameState`].

use crate::config::EventConfig;
use crate::rematch::{update_gym_leader_rematch, RematchSelection};
use crate::species::SpeciesTable;
use crate::state::GameState;
use crate::wonder_trade::{prepare_wonder_trade_scene, wonder_trade, WonderTradeResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Special {
    /// Party slot in `var_8004`.
    WonderTrade,
    /// Party slot in `var_8005`.
    PrepareWonderTradeScene,
    UpdateGymLeaderRematch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialOutcome {
    WonderTrade(WonderTradeResult),
    GymLeaderRematch(Option<RematchSelection>),
}

/// Shared read-only data the specials need.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub species: &'a SpeciesTable,
    pub config: &'a EventConfig,
}

pub fn execute_special(
    special: Special,
    state: &mut GameState,
    ctx: EventContext<'_>,
    rng: &mut impl Rng,
) -> SpecialOutcome {
    match special {
        Special::WonderTrade => {
            let slot = state.special_vars.var_8004 as usize;
            SpecialOutcome::WonderTrade(wonder_trade(
                state,
                slot,
                ctx.species,
                &ctx.config.wonder_trade,
                rng,
            ))
        }
        Special::PrepareWonderTradeScene => {
            let slot = state.special_vars.var_8005 as usize;
            SpecialOutcome::WonderTrade(prepare_wonder_trade_scene(
                state,
                slot,
                ctx.species,
                &ctx.config.wonder_trade,
                rng,
            ))
        }
        Special::UpdateGymLeaderRematch => SpecialOutcome::GymLeaderRematch(
            update_gym_leader_rematch(state, &ctx.config.rematch, rng),
        ),
    }
}
