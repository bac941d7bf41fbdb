use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Tackle,
    Scratch,
    Growl,
    TailWhip,
    SandAttack,
    Splash,
    Bite,
    Ember,
    WaterGun,
    VineWhip,
    ThunderShock,
    Confusion,
    Psychic,
    Teleport,
    Dig,
    Fly,
    Surf,
    Strength,
    Cut,
    Flash,
    RockSmash,
    Waterfall,
    Dive,
    Earthquake,
    HydroPump,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::TailWhip => "Tail Whip",
            Move::SandAttack => "Sand Attack",
            Move::WaterGun => "Water Gun",
            Move::VineWhip => "Vine Whip",
            Move::ThunderShock => "Thunder Shock",
            Move::RockSmash => "Rock Smash",
            Move::HydroPump => "Hydro Pump",
            other => return write!(f, "{:?}", other),
        };
        write!(f, "{}", name)
    }
}
