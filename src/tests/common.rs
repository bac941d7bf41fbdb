use crate::pokemon::{OriginalTrainer, OtGender, OtIdMode, PokemonInst};
use crate::species::{Species, SpeciesTable};
use crate::state::GameState;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schema::{BaseStats, Learnset, Move, PokemonSpecies, PokemonType};

const SPECIES_DATA: &str = include_str!("../../data/species.ron");

/// The species table shipped in `data/species.ron`.
pub fn demo_species_table() -> SpeciesTable {
    match SpeciesTable::from_ron_str(SPECIES_DATA) {
        Ok(table) => table,
        Err(err) => panic!("Failed to parse data/species.ron: {}", err),
    }
}

/// A minimal species entry with the given HP stat and no learnset.
/// An HP of 0 makes the entry unimplemented.
pub fn test_species_entry(species: Species, hp: u8) -> PokemonSpecies {
    PokemonSpecies {
        species,
        name: format!("Test{}", species.id()),
        types: vec![PokemonType::Normal],
        base_stats: BaseStats {
            hp,
            attack: hp,
            defense: hp,
            sp_attack: hp,
            sp_defense: hp,
            speed: hp,
        },
        learnset: Learnset::default(),
    }
}

pub fn species_table_from_entries(entries: Vec<PokemonSpecies>) -> SpeciesTable {
    match SpeciesTable::from_entries(entries) {
        Ok(table) => table,
        Err(err) => panic!("Invalid test species table: {}", err),
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random source that returns the same word forever.
pub struct ConstantRng(pub u64);

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = bytes[i % bytes.len()];
        }
    }
}

/// The player's own trainer identity used for test Pokemon.
pub fn player_ot() -> OriginalTrainer {
    OriginalTrainer {
        id: 0x0001_E240,
        name: "BRENDAN".to_string(),
        gender: OtGender::Male,
    }
}

/// A builder for creating test Pokemon instances with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(Species::SANDSHREW, 20)
///     .with_moves(vec![Move::Dig])
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    level: u8,
    moves: Option<Vec<Move>>,
    ot: OriginalTrainer,
    is_egg: bool,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given species and level.
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            ot: player_ot(),
            is_egg: false,
        }
    }

    /// Replaces the learnset-derived moves.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_ot(mut self, id: u32, name: &str) -> Self {
        self.ot = OriginalTrainer {
            id,
            name: name.to_string(),
            gender: OtGender::Male,
        };
        self
    }

    pub fn as_egg(mut self) -> Self {
        self.is_egg = true;
        self
    }

    /// Builds the `PokemonInst` from the demo species table.
    pub fn build(self) -> PokemonInst {
        let table = demo_species_table();
        let species_data = match table.get(self.species) {
            Ok(data) => data,
            Err(err) => panic!(
                "Failed to load species data for {}: {}",
                self.species, err
            ),
        };

        let mut rng = seeded_rng(0);
        let preset_id = self.ot.id;
        let mut pokemon = PokemonInst::create(
            species_data,
            self.level,
            Some([15; 6]),
            self.ot,
            OtIdMode::Preset(preset_id),
            &mut rng,
        );

        if let Some(moves) = self.moves {
            pokemon.moves = [None; 4];
            for (i, move_) in moves.into_iter().take(4).enumerate() {
                pokemon.moves[i] = Some(move_);
            }
        }
        pokemon.is_egg = self.is_egg;
        pokemon
    }
}

/// A state whose party holds `party` with the cursor on slot 0.
pub fn create_test_state(party: Vec<PokemonInst>) -> GameState {
    GameState::with_party(party)
}
