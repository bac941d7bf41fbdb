use super::{
    mon_is_eligible_for_field_move, FieldCallback, FieldEffect, FieldMoveContinuation,
    OverworldCommand,
};
use crate::species::SpeciesTable;
use crate::state::{FollowerNpcFlags, GameState};
use schema::Move;
use tracing::debug;

/// Check whether the selected Pokemon can Teleport from here, registering the
/// Teleport callbacks when it can.
pub fn setup_field_move_teleport(state: &mut GameState, species: &SpeciesTable) -> bool {
    if !state.check_follower_npc_flag(FollowerNpcFlags::CAN_LEAVE_ROUTE) {
        debug!("teleport blocked: follower cannot leave the route");
        return false;
    }

    if !state.map.map_type.allows_teleport_and_fly() {
        debug!(map_type = ?state.map.map_type, "teleport blocked by map type");
        return false;
    }

    match state.selected_pokemon() {
        Some(pokemon) if mon_is_eligible_for_field_move(pokemon, Move::Teleport, species) => {}
        _ => return false,
    }

    state.field_callbacks.callback2 = Some(FieldCallback::PrepareFadeInForTeleport);
    state.field_callbacks.post_menu = Some(FieldCallback::Teleport);
    true
}

pub(crate) fn field_callback_teleport(state: &mut GameState) -> Vec<OverworldCommand> {
    state.field_effect_arguments[0] = state.cursor_selection as u32;
    vec![
        OverworldCommand::ResetStateAfterTeleport,
        OverworldCommand::FieldEffectStart(FieldEffect::UseTeleport),
    ]
}

pub fn use_teleport_field_effect(_state: &GameState) -> Vec<OverworldCommand> {
    vec![
        OverworldCommand::CreateFieldMoveTask {
            continuation: FieldMoveContinuation::StartTeleport,
        },
        OverworldCommand::SetPlayerAvatarOnFoot,
    ]
}

pub fn start_teleport_field_effect(_state: &GameState) -> Vec<OverworldCommand> {
    vec![
        OverworldCommand::FieldEffectActiveListRemove(FieldEffect::UseTeleport),
        OverworldCommand::TeleportWarpOut,
    ]
}
