//! Command-line driver that runs one overworld event against a demo save and
//! prints what happened as JSON.
//!
//! Usage: `overworld-events <dig|teleport|rematch|wonder-trade SLOT|wonder-trade-scene SLOT>`
//!
//! `OVERWORLD_EVENTS_CONFIG` may point at a RON event config; `RUST_LOG`
//! controls log output.

use overworld_events::{
    execute_special, run_field_move_continuation, run_post_menu_field_callback,
    setup_field_move_dig, setup_field_move_teleport, EventConfig, EventContext, Flag, GameState,
    OriginalTrainer, OtGender, OtIdMode, OverworldCommand, PokemonInst, Special, SpecialOutcome,
    Species, SpeciesTable,
};
use overworld_events::field_moves::{use_dig_field_effect, use_teleport_field_effect};
use overworld_events::rematch::GymLeader;
use rand::Rng;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "OVERWORLD_EVENTS_CONFIG";

#[derive(Debug, Serialize)]
struct FieldMoveReport {
    usable: bool,
    commands: Vec<OverworldCommand>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report {
    FieldMove(FieldMoveReport),
    Special(SpecialOutcome),
}

#[derive(Debug, Serialize)]
struct EventReport<'a> {
    event: &'a str,
    report: Report,
    party: Vec<&'a PokemonInst>,
    staged: Option<&'a PokemonInst>,
    result: u16,
    received: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(event) = args.first() else {
        return Err("expected an event: dig, teleport, rematch, wonder-trade SLOT or wonder-trade-scene SLOT".into());
    };

    let species = SpeciesTable::load(Path::new("data/species.ron"))?;
    let config = match env::var_os(CONFIG_ENV) {
        Some(path) => EventConfig::load(&PathBuf::from(path))?,
        None => EventConfig::default(),
    };
    info!(species = species.len(), "species data loaded");

    let mut rng = rand::rng();
    let mut state = demo_state(&species, &mut rng)?;
    let ctx = EventContext {
        species: &species,
        config: &config,
    };

    let report = match event.as_str() {
        "dig" => {
            let usable = setup_field_move_dig(&mut state, &species);
            Report::FieldMove(run_field_move(&mut state, usable, use_dig_field_effect))
        }
        "teleport" => {
            state.cursor_selection = 1;
            let usable = setup_field_move_teleport(&mut state, &species);
            Report::FieldMove(run_field_move(&mut state, usable, use_teleport_field_effect))
        }
        "rematch" => Report::Special(execute_special(
            Special::UpdateGymLeaderRematch,
            &mut state,
            ctx,
            &mut rng,
        )),
        "wonder-trade" => {
            state.special_vars.var_8004 = parse_slot(args.get(1))?;
            Report::Special(execute_special(Special::WonderTrade, &mut state, ctx, &mut rng))
        }
        "wonder-trade-scene" => {
            state.special_vars.var_8005 = parse_slot(args.get(1))?;
            Report::Special(execute_special(
                Special::PrepareWonderTradeScene,
                &mut state,
                ctx,
                &mut rng,
            ))
        }
        other => return Err(format!("unknown event '{}'", other).into()),
    };

    let received = match &report {
        Report::Special(SpecialOutcome::WonderTrade(Ok(receipt))) => {
            Some(species.describe(receipt.received))
        }
        _ => None,
    };

    let output = EventReport {
        event,
        report,
        party: state.party.iter().flatten().collect(),
        staged: state.enemy_party[0].as_ref(),
        result: state.special_vars.result,
        received,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_slot(arg: Option<&String>) -> Result<u16, Box<dyn Error>> {
    let arg = arg.ok_or("expected a party slot")?;
    Ok(arg.parse::<u16>()?)
}

/// Drive a field move the way the overworld would once the menu closes.
fn run_field_move(
    state: &mut GameState,
    usable: bool,
    use_effect: fn(&GameState) -> Vec<OverworldCommand>,
) -> FieldMoveReport {
    if !usable {
        return FieldMoveReport {
            usable,
            commands: Vec::new(),
        };
    }

    let mut commands = run_post_menu_field_callback(state);
    commands.extend(use_effect(state));
    let continuations: Vec<_> = commands
        .iter()
        .filter_map(|command| match command {
            OverworldCommand::CreateFieldMoveTask { continuation } => Some(*continuation),
            _ => None,
        })
        .collect();
    for continuation in continuations {
        commands.extend(run_field_move_continuation(continuation, state));
    }

    FieldMoveReport { usable, commands }
}

/// A mid-game save: four badges, a Dig user, a Teleport user and a couple of
/// gym leaders already beaten once.
fn demo_state(species: &SpeciesTable, rng: &mut impl Rng) -> Result<GameState, Box<dyn Error>> {
    let ot = OriginalTrainer {
        id: 0x0001_E240,
        name: "BRENDAN".to_string(),
        gender: OtGender::Male,
    };
    let mut party = Vec::new();
    for (member, level) in [
        (Species::DIGLETT, 22),
        (Species::ABRA, 16),
        (Species::ZIGZAGOON, 19),
    ] {
        let data = species.get(member)?;
        party.push(PokemonInst::create(
            data,
            level,
            None,
            ot.clone(),
            OtIdMode::Preset(ot.id),
            rng,
        ));
    }

    let mut state = GameState::with_party(party);
    for badge in &Flag::BADGES[..4] {
        state.flag_set(*badge);
    }
    for leader in [GymLeader::Roxanne, GymLeader::Brawly] {
        state.record_trainer_defeated(leader.rematch_trainers()[0]);
    }
    Ok(state)
}
