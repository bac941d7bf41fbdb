//! Party-menu field moves that move the player: Dig and Teleport.
//!
//! Eligibility checks register callbacks on the [`GameState`]. The overworld
//! engine later runs them through [`run_post_menu_field_callback`] and
//! [`run_field_move_continuation`], which return the [`OverworldCommand`]s the
//! engine must carry out.

pub mod dig;
pub mod teleport;

pub use dig::*;
pub use teleport::*;

use crate::pokemon::PokemonInst;
use crate::species::SpeciesTable;
use crate::state::GameState;
use schema::Move;
use serde::{Deserialize, Serialize};

/// Callbacks the overworld engine runs after the party menu closes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCallback {
    PrepareFadeInFromMenu,
    PrepareFadeInForTeleport,
    Dig,
    Teleport,
}

/// Function stored in a field-move task, run once the "use move" animation ends.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMoveContinuation {
    StartDig,
    StartTeleport,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEffect {
    UseDig,
    UseTeleport,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScript {
    UseDig,
}

/// Requests for the overworld engine, in execution order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum OverworldCommand {
    ResetStateAfterDigEscapeRope,
    ResetStateAfterTeleport,
    SetupScript(EventScript),
    FieldEffectStart(FieldEffect),
    FieldEffectActiveListRemove(FieldEffect),
    CreateFieldMoveTask {
        continuation: FieldMoveContinuation,
    },
    SetPlayerAvatarOnFoot,
    EnableScriptContext,
    CreateDigEscapeRopeTask,
    TeleportWarpOut,
}

/// A real, hatched Pokemon that knows `move_` or could be taught it.
pub fn mon_is_eligible_for_field_move(
    pokemon: &PokemonInst,
    move_: Move,
    species: &SpeciesTable,
) -> bool {
    if pokemon.species.is_none() || pokemon.is_egg {
        return false;
    }
    pokemon.knows_move(move_) || species.can_learn_teachable_move(pokemon.species, move_)
}

/// Take and run the registered post-menu callback.
pub fn run_post_menu_field_callback(state: &mut GameState) -> Vec<OverworldCommand> {
    match state.field_callbacks.post_menu.take() {
        Some(FieldCallback::Dig) => field_callback_dig(state),
        Some(FieldCallback::Teleport) => field_callback_teleport(state),
        // Fade-in callbacks belong in callback2 and are handled by the engine itself
        Some(FieldCallback::PrepareFadeInFromMenu)
        | Some(FieldCallback::PrepareFadeInForTeleport)
        | None => Vec::new(),
    }
}

pub fn run_field_move_continuation(
    continuation: FieldMoveContinuation,
    state: &mut GameState,
) -> Vec<OverworldCommand> {
    match continuation {
        FieldMoveContinuation::StartDig => start_dig_field_effect(state),
        FieldMoveContinuation::StartTeleport => start_teleport_field_effect(state),
    }
}
