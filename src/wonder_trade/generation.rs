use super::exclusions::{is_banned_legendary, is_banned_mega_forme};
use crate::config::WonderTradeConfig;
use crate::pokemon::{OriginalTrainer, OtGender, OtIdMode, PokemonInst};
use crate::species::{Species, SpeciesTable};
use rand::Rng;
use tracing::{debug, warn};

/// A species Wonder Trade may hand out: real, not banned, and implemented.
pub fn is_valid_wonder_trade_species(species: Species, table: &SpeciesTable) -> bool {
    if species.is_none() || species == Species::EGG {
        return false;
    }
    if is_banned_legendary(species) || is_banned_mega_forme(species) {
        return false;
    }
    table.is_implemented(species)
}

/// Fails the sanity checks a received Pokemon must pass.
pub fn is_received_mon_bad(pokemon: &PokemonInst) -> bool {
    let species = pokemon.species_or_egg();
    species.is_none() || species == Species::EGG || pokemon.is_egg || pokemon.is_bad_egg
}

pub fn wonder_trade_ot(config: &WonderTradeConfig) -> OriginalTrainer {
    OriginalTrainer {
        id: config.ot_id,
        name: config.ot_name.clone(),
        gender: OtGender::Male,
    }
}

/// Draw species uniformly from the whole species range until one is valid and
/// produces a sound trial Pokemon at `level`. Falls back to the configured
/// species once the draw budget is spent.
pub fn random_safe_species(
    level: u8,
    table: &SpeciesTable,
    config: &WonderTradeConfig,
    rng: &mut impl Rng,
) -> Species {
    let species_count = table.species_count();
    if species_count > 1 {
        for tries in 0..config.species_attempts {
            let species = Species(rng.random_range(1..species_count));
            if !is_valid_wonder_trade_species(species, table) {
                continue;
            }

            let Ok(data) = table.get(species) else {
                continue;
            };
            let trial = PokemonInst::create(
                data,
                level,
                None,
                wonder_trade_ot(config),
                OtIdMode::RandomNoShiny,
                rng,
            );
            if is_received_mon_bad(&trial) {
                continue;
            }

            debug!(%species, tries, "wonder trade species accepted");
            return species;
        }
    }

    warn!(
        attempts = config.species_attempts,
        fallback = %config.fallback_species,
        "no valid wonder trade species found, using fallback"
    );
    config.fallback_species
}

/// Create the Pokemon received in a Wonder Trade, retrying while the result
/// fails the sanity checks.
pub fn create_received_pokemon(
    level: u8,
    table: &SpeciesTable,
    config: &WonderTradeConfig,
    rng: &mut impl Rng,
) -> Option<PokemonInst> {
    for _ in 0..config.creation_attempts {
        let species = random_safe_species(level, table, config, rng);
        let Ok(data) = table.get(species) else {
            warn!(%species, "wonder trade species has no table entry");
            continue;
        };
        let received = PokemonInst::create(
            data,
            level,
            None,
            wonder_trade_ot(config),
            OtIdMode::Preset(config.ot_id),
            rng,
        );
        if !is_received_mon_bad(&received) {
            return Some(received);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{species_table_from_entries, test_species_entry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_valid_species_rules() {
        let table = species_table_from_entries(vec![
            test_species_entry(Species::PIKACHU, 35),
            test_species_entry(Species::MEW, 100),
            test_species_entry(Species::RAYQUAZA_MEGA, 105),
            test_species_entry(Species::EEVEE, 0),
        ]);
        assert!(is_valid_wonder_trade_species(Species::PIKACHU, &table));
        assert!(!is_valid_wonder_trade_species(Species::MEW, &table));
        assert!(!is_valid_wonder_trade_species(Species::RAYQUAZA_MEGA, &table));
        assert!(!is_valid_wonder_trade_species(Species::EEVEE, &table));
        assert!(!is_valid_wonder_trade_species(Species::ABRA, &table));
        assert!(!is_valid_wonder_trade_species(Species::NONE, &table));
        assert!(!is_valid_wonder_trade_species(Species::EGG, &table));
    }

    #[test]
    fn test_falls_back_when_every_draw_is_rejected() {
        let table = species_table_from_entries(vec![
            test_species_entry(Species::MEW, 100),
            test_species_entry(Species::KYOGRE, 100),
            test_species_entry(Species::GYARADOS_MEGA, 95),
        ]);
        let config = WonderTradeConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            random_safe_species(20, &table, &config, &mut rng),
            Species::MAGIKARP
        );
    }

    #[test]
    fn test_only_valid_species_is_found() {
        let table = species_table_from_entries(vec![
            test_species_entry(Species::MEW, 100),
            test_species_entry(Species::ZIGZAGOON, 38),
            test_species_entry(Species::DEOXYS, 50),
        ]);
        let config = WonderTradeConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10 {
            assert_eq!(
                random_safe_species(15, &table, &config, &mut rng),
                Species::ZIGZAGOON
            );
        }
    }

    #[test]
    fn test_missing_fallback_entry_fails_creation() {
        let table = species_table_from_entries(vec![test_species_entry(Species::MEW, 100)]);
        let config = WonderTradeConfig {
            species_attempts: 20,
            creation_attempts: 3,
            ..WonderTradeConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(create_received_pokemon(30, &table, &config, &mut rng).is_none());
    }

    #[test]
    fn test_received_pokemon_carries_wonder_ot() {
        let table = species_table_from_entries(vec![test_species_entry(Species::POOCHYENA, 35)]);
        let config = WonderTradeConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let received = create_received_pokemon(12, &table, &config, &mut rng).unwrap();
        assert_eq!(received.species, Species::POOCHYENA);
        assert_eq!(received.level, 12);
        assert_eq!(received.ot.id, config.ot_id);
        assert!(!is_received_mon_bad(&received));
    }

    #[test]
    fn test_bad_egg_is_bad() {
        let table = species_table_from_entries(vec![test_species_entry(Species::POOCHYENA, 35)]);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut pokemon =
            create_received_pokemon(12, &table, &WonderTradeConfig::default(), &mut rng).unwrap();
        pokemon.is_bad_egg = true;
        assert!(is_received_mon_bad(&pokemon));
        pokemon.is_bad_egg = false;
        pokemon.is_egg = true;
        assert!(is_received_mon_bad(&pokemon));
    }
}
