use super::{
    mon_is_eligible_for_field_move, EventScript, FieldCallback, FieldEffect,
    FieldMoveContinuation, OverworldCommand,
};
use crate::species::SpeciesTable;
use crate::state::GameState;
use schema::{Item, Move};
use tracing::debug;

/// Check whether the selected Pokemon can use Dig here, registering the Dig
/// callbacks when it can.
///
/// A Pokemon that does not know Dig may still use it if it can learn it and
/// the bag holds a TM Dig. The TM is consumed by the Dig script, not here.
pub fn setup_field_move_dig(state: &mut GameState, species: &SpeciesTable) -> bool {
    let Some(pokemon) = state.selected_pokemon() else {
        return false;
    };
    if pokemon.species.is_none() || pokemon.is_egg {
        return false;
    }

    if !state.map.allow_escaping {
        debug!(species = %pokemon.species, "dig blocked by map");
        return false;
    }

    let knows_dig = pokemon.knows_move(Move::Dig);
    if !mon_is_eligible_for_field_move(pokemon, Move::Dig, species) {
        return false;
    }

    if !knows_dig && !state.bag.has_item(Item::TmDig, 1) {
        debug!(species = %pokemon.species, "dig needs a TM Dig in the bag");
        return false;
    }

    state.field_callbacks.callback2 = Some(FieldCallback::PrepareFadeInFromMenu);
    state.field_callbacks.post_menu = Some(FieldCallback::Dig);
    true
}

pub(crate) fn field_callback_dig(state: &mut GameState) -> Vec<OverworldCommand> {
    state.field_effect_arguments[0] = state.cursor_selection as u32;
    vec![
        OverworldCommand::ResetStateAfterDigEscapeRope,
        OverworldCommand::SetupScript(EventScript::UseDig),
    ]
}

/// Field effect entry point started by the Dig script.
pub fn use_dig_field_effect(state: &GameState) -> Vec<OverworldCommand> {
    let mut commands = vec![OverworldCommand::CreateFieldMoveTask {
        continuation: FieldMoveContinuation::StartDig,
    }];
    if !state.map.braille_dig_spot {
        commands.push(OverworldCommand::SetPlayerAvatarOnFoot);
    }
    commands
}

pub fn start_dig_field_effect(state: &GameState) -> Vec<OverworldCommand> {
    let mut commands = vec![OverworldCommand::FieldEffectActiveListRemove(FieldEffect::UseDig)];
    if state.map.braille_dig_spot {
        // The sealed chamber script runs the braille effect itself
        commands.push(OverworldCommand::EnableScriptContext);
    } else {
        commands.push(OverworldCommand::CreateDigEscapeRopeTask);
    }
    commands
}
