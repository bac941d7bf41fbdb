use crate::field_moves::FieldCallback;
use crate::pokemon::PokemonInst;
use crate::rematch::{TrainerId, REMATCH_TABLE_ENTRIES};
use bitflags::bitflags;
use schema::Item;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const PARTY_SIZE: usize = 6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Badge01Get,
    Badge02Get,
    Badge03Get,
    Badge04Get,
    Badge05Get,
    Badge06Get,
    Badge07Get,
    Badge08Get,
    SysGameClear,
}

impl Flag {
    pub const BADGES: [Flag; 8] = [
        Flag::Badge01Get,
        Flag::Badge02Get,
        Flag::Badge03Get,
        Flag::Badge04Get,
        Flag::Badge05Get,
        Flag::Badge06Get,
        Flag::Badge07Get,
        Flag::Badge08Get,
    ];
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    GymRematchLastBadges,
    GymRematchUnlockMask,
}

/// Script special variables shared with the event script engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialVars {
    pub var_8004: u16,
    pub var_8005: u16,
    pub result: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    Town,
    City,
    Route,
    Underground,
    Underwater,
    OceanRoute,
    Indoor,
    SecretBase,
}

impl MapType {
    pub fn allows_teleport_and_fly(self) -> bool {
        matches!(
            self,
            MapType::Town | MapType::City | MapType::Route | MapType::OceanRoute
        )
    }
}

/// Header data of the map the player currently stands on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapContext {
    pub map_type: MapType,
    /// Dig and Escape Rope may be used here.
    pub allow_escaping: bool,
    /// The player faces the sealed chamber wall that reacts to Dig.
    pub braille_dig_spot: bool,
}

impl Default for MapContext {
    fn default() -> Self {
        Self {
            map_type: MapType::Route,
            allow_escaping: true,
            braille_dig_spot: false,
        }
    }
}

bitflags! {
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FollowerNpcFlags: u16 {
        const HAS_RUNNING_FRAMES = 1 << 0;
        const CAN_BIKE = 1 << 1;
        const CAN_LEAVE_ROUTE = 1 << 2;
        const CAN_SURF = 1 << 3;
        const CAN_WATERFALL = 1 << 4;
        const CAN_DIVE = 1 << 5;
        const CLEAR_ON_WHITE_OUT = 1 << 6;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FollowerNpc {
    pub name: String,
    pub flags: FollowerNpcFlags,
}

/// Callback slots read by the overworld engine once the party menu closes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCallbacks {
    pub callback2: Option<FieldCallback>,
    pub post_menu: Option<FieldCallback>,
}

/// Item bag keyed by item with its held quantity.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Bag {
    items: HashMap<Item, u16>,
}

impl Bag {
    pub fn add_item(&mut self, item: Item, quantity: u16) {
        let held = self.items.entry(item).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    pub fn has_item(&self, item: Item, quantity: u16) -> bool {
        self.items.get(&item).is_some_and(|&held| held >= quantity)
    }

    pub fn quantity(&self, item: Item) -> u16 {
        self.items.get(&item).copied().unwrap_or(0)
    }
}

/// The save-game data the event procedures read and mutate.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameState {
    pub party: [Option<PokemonInst>; PARTY_SIZE],
    /// Opponent-side party; slot 0 doubles as the incoming-trade staging slot.
    pub enemy_party: [Option<PokemonInst>; PARTY_SIZE],
    pub flags: HashSet<Flag>,
    pub vars: HashMap<Var, u16>,
    pub special_vars: SpecialVars,
    pub bag: Bag,
    pub defeated_trainers: HashSet<TrainerId>,
    /// Queued rematch tier per rematch id; 0 means nothing queued.
    pub trainer_rematches: Vec<u8>,
    pub map: MapContext,
    pub follower: Option<FollowerNpc>,
    /// Party slot highlighted in the party menu.
    pub cursor_selection: usize,
    pub field_callbacks: FieldCallbacks,
    pub field_effect_arguments: [u32; 8],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            party: [const { None }; PARTY_SIZE],
            enemy_party: [const { None }; PARTY_SIZE],
            flags: HashSet::new(),
            vars: HashMap::new(),
            special_vars: SpecialVars::default(),
            bag: Bag::default(),
            defeated_trainers: HashSet::new(),
            trainer_rematches: vec![0; REMATCH_TABLE_ENTRIES],
            map: MapContext::default(),
            follower: None,
            cursor_selection: 0,
            field_callbacks: FieldCallbacks::default(),
            field_effect_arguments: [0; 8],
        }
    }

    /// Create a state whose party holds the given Pokemon in order
    pub fn with_party(party: Vec<PokemonInst>) -> Self {
        let mut state = Self::new();
        for (i, pokemon) in party.into_iter().take(PARTY_SIZE).enumerate() {
            state.party[i] = Some(pokemon);
        }
        state
    }

    pub fn flag_get(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn flag_set(&mut self, flag: Flag) {
        self.flags.insert(flag);
    }

    pub fn var_get(&self, var: Var) -> u16 {
        self.vars.get(&var).copied().unwrap_or(0)
    }

    pub fn var_set(&mut self, var: Var, value: u16) {
        self.vars.insert(var, value);
    }

    /// Number of occupied party slots before the first empty one
    pub fn party_count(&self) -> usize {
        self.party.iter().take_while(|slot| slot.is_some()).count()
    }

    /// The Pokemon under the party-menu cursor
    pub fn selected_pokemon(&self) -> Option<&PokemonInst> {
        self.party.get(self.cursor_selection).and_then(|slot| slot.as_ref())
    }

    pub fn has_trainer_been_fought(&self, trainer: TrainerId) -> bool {
        self.defeated_trainers.contains(&trainer)
    }

    pub fn record_trainer_defeated(&mut self, trainer: TrainerId) {
        self.defeated_trainers.insert(trainer);
    }

    /// Follower gate: passes when no follower is present or the follower has `flag`.
    pub fn check_follower_npc_flag(&self, flag: FollowerNpcFlags) -> bool {
        match &self.follower {
            None => true,
            Some(follower) => follower.flags.contains(flag),
        }
    }
}
