use crate::errors::SpeciesDataResult;
use crate::species::{Species, SpeciesTable};
use rand::Rng;
use schema::{BaseStats, Move, PokemonSpecies};
use serde::{Deserialize, Serialize};

pub const MAX_IV: u8 = 31;
/// Shiny when the XOR of OT id halves and personality halves is below this.
pub const SHINY_ODDS: u32 = 8;
/// Random OT id draws before the non-shiny id is derived directly.
pub const NON_SHINY_OT_ID_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtGender {
    Male,
    Female,
}

/// How the original-trainer id of a freshly created creature is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtIdMode {
    /// A random id that can never make the creature shiny.
    RandomNoShiny,
    Preset(u32),
}

/// Original-trainer identity recorded on a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalTrainer {
    pub id: u32,
    pub name: String,
    pub gender: OtGender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub name: String,                 // Species name if no nickname
    pub species: Species,
    pub level: u8,
    pub is_egg: bool,
    pub is_bad_egg: bool,             // Checksum sanity flag
    pub personality: u32,
    pub ot: OriginalTrainer,
    pub met_location: u16,
    pub met_level: u8,
    pub ivs: [u8; 6],                 // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub evs: [u8; 6],                 // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub curr_stats: [u16; 6],         // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub moves: [Option<Move>; 4],
}

impl PokemonInst {
    /// Create a new Pokemon instance from species data.
    ///
    /// IVs are rolled when not provided; moves default to the latest level-up
    /// moves known at `level`.
    pub fn create(
        species_data: &PokemonSpecies,
        level: u8,
        ivs: Option<[u8; 6]>,
        ot: OriginalTrainer,
        ot_id_mode: OtIdMode,
        rng: &mut impl Rng,
    ) -> Self {
        let ivs = ivs.unwrap_or_else(|| random_ivs(rng));
        let personality: u32 = rng.random();
        let ot_id = match ot_id_mode {
            OtIdMode::Preset(id) => id,
            OtIdMode::RandomNoShiny => random_non_shiny_ot_id(personality, rng),
        };

        let evs = [0; 6];
        let curr_stats = Self::calculate_stats(&species_data.base_stats, level, &ivs, &evs);

        let mut moves = [None; 4];
        for (i, move_) in species_data
            .learnset
            .moves_known_at_level(level)
            .into_iter()
            .take(4)
            .enumerate()
        {
            moves[i] = Some(move_);
        }

        PokemonInst {
            name: species_data.name.clone(),
            species: species_data.species,
            level,
            is_egg: false,
            is_bad_egg: false,
            personality,
            ot: OriginalTrainer { id: ot_id, ..ot },
            met_location: 0,
            met_level: level,
            ivs,
            evs,
            curr_stats,
            moves,
        }
    }

    /// The species, or the egg pseudo-species while this is still an egg.
    pub fn species_or_egg(&self) -> Species {
        if self.is_egg {
            Species::EGG
        } else {
            self.species
        }
    }

    pub fn knows_move(&self, move_: Move) -> bool {
        self.moves.iter().flatten().any(|&known| known == move_)
    }

    pub fn is_shiny(&self) -> bool {
        shiny_value(self.ot.id, self.personality) < SHINY_ODDS
    }

    pub fn max_hp(&self) -> u16 {
        self.curr_stats[0]
    }

    /// Recompute derived stats from the species table
    pub fn recalculate_stats(&mut self, species: &SpeciesTable) -> SpeciesDataResult<()> {
        let data = species.get(self.species)?;
        self.curr_stats = Self::calculate_stats(&data.base_stats, self.level, &self.ivs, &self.evs);
        Ok(())
    }

    /// Calculate current stats based on base stats, level, IVs, and EVs
    /// Uses Gen 3+ stat calculation formula without natures
    pub fn calculate_stats(
        base_stats: &BaseStats,
        level: u8,
        ivs: &[u8; 6],
        evs: &[u8; 6],
    ) -> [u16; 6] {
        let base = base_stats.as_array();
        let level = level as u32;
        let mut stats = [0u16; 6];

        for i in 0..6 {
            let base_calculation = 2 * base[i] as u32 + ivs[i] as u32 + (evs[i] as u32 / 4);
            let stat = if i == 0 {
                // HP = floor(0.01 * (2 * Base + IV + floor(0.25 * EV)) * Level) + Level + 10
                (base_calculation * level) / 100 + level + 10
            } else {
                // Other Stat = floor(0.01 * (2 * Base + IV + floor(0.25 * EV)) * Level) + 5
                (base_calculation * level) / 100 + 5
            };
            stats[i] = stat.min(u16::MAX as u32) as u16;
        }

        stats
    }
}

fn random_ivs(rng: &mut impl Rng) -> [u8; 6] {
    let mut ivs = [0u8; 6];
    for iv in ivs.iter_mut() {
        *iv = rng.random_range(0..=MAX_IV);
    }
    ivs
}

fn shiny_value(ot_id: u32, personality: u32) -> u32 {
    (ot_id >> 16) ^ (ot_id & 0xFFFF) ^ (personality >> 16) ^ (personality & 0xFFFF)
}

fn random_non_shiny_ot_id(personality: u32, rng: &mut impl Rng) -> u32 {
    let mut candidate: u32 = 0;
    for _ in 0..NON_SHINY_OT_ID_ATTEMPTS {
        candidate = rng.random();
        if shiny_value(candidate, personality) >= SHINY_ODDS {
            return candidate;
        }
    }
    // Flip low-half bits so the shiny value lands exactly on SHINY_ODDS
    candidate ^ ((shiny_value(candidate, personality) ^ SHINY_ODDS) & 0xFFFF)
}
