use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

// Re-export the Species id from the schema crate
pub use schema::Species;

use crate::errors::{SpeciesDataError, SpeciesDataResult};
use schema::{BaseStats, Move, PokemonSpecies};

/// In-memory species database keyed by species id.
///
/// Ids between 1 and the highest loaded id that have no entry behave like
/// unimplemented placeholder entries: they exist in the numeric range but carry
/// no stats.
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    entries: HashMap<Species, PokemonSpecies>,
    max_id: u16,
}

impl SpeciesTable {
    pub fn from_entries(entries: Vec<PokemonSpecies>) -> SpeciesDataResult<Self> {
        let mut table = SpeciesTable::default();
        for entry in entries {
            let species = entry.species;
            if table.entries.contains_key(&species) {
                return Err(SpeciesDataError::DuplicateSpecies(species));
            }
            table.max_id = table.max_id.max(species.id());
            table.entries.insert(species, entry);
        }
        Ok(table)
    }

    /// Parse a RON list of species entries
    pub fn from_ron_str(content: &str) -> SpeciesDataResult<Self> {
        let entries: Vec<PokemonSpecies> = ron::from_str(content)?;
        Self::from_entries(entries)
    }

    /// Load the species table from a RON file
    pub fn load(path: &Path) -> SpeciesDataResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SpeciesDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// One past the highest species id; valid draws come from `1..species_count()`.
    pub fn species_count(&self) -> u16 {
        self.max_id.saturating_add(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, species: Species) -> SpeciesDataResult<&PokemonSpecies> {
        self.entries
            .get(&species)
            .ok_or(SpeciesDataError::SpeciesNotFound(species))
    }

    /// Base stats, or all zeroes for ids without an entry.
    pub fn base_stats(&self, species: Species) -> BaseStats {
        self.entries
            .get(&species)
            .map(|data| data.base_stats.clone())
            .unwrap_or_default()
    }

    pub fn is_implemented(&self, species: Species) -> bool {
        !self.base_stats(species).is_unimplemented()
    }

    pub fn can_learn_teachable_move(&self, species: Species, move_: Move) -> bool {
        self.entries
            .get(&species)
            .is_some_and(|data| data.learnset.can_learn_teachable_move(move_))
    }

    /// Multi-line summary of a species for reports
    pub fn describe(&self, species: Species) -> String {
        let mut out = String::new();
        match self.get(species) {
            Ok(data) => {
                let types: Vec<String> = data.types.iter().map(|t| t.to_string()).collect();
                let stats = &data.base_stats;
                let _ = writeln!(out, "{} ({})", data.name, species);
                let _ = writeln!(out, "Type(s): {}", types.join(" / "));
                let _ = write!(
                    out,
                    "Base Stats: HP:{} ATK:{} DEF:{} SP.ATK:{} SP.DEF:{} SPD:{}",
                    stats.hp,
                    stats.attack,
                    stats.defense,
                    stats.sp_attack,
                    stats.sp_defense,
                    stats.speed
                );
            }
            Err(_) => {
                let _ = write!(out, "{}", species);
            }
        }
        out
    }
}
