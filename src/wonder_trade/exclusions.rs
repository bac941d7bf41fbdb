use crate::species::Species;

/// Legendary and mythical species that Wonder Trade never hands out.
pub const BANNED_LEGENDARIES: [Species; 11] = [
    Species::MEW,
    Species::KYOGRE,
    Species::GROUDON,
    Species::RAYQUAZA,
    Species::LATIAS,
    Species::LATIOS,
    Species::REGIROCK,
    Species::REGICE,
    Species::REGISTEEL,
    Species::JIRACHI,
    Species::DEOXYS,
];

/// Mega formes that Wonder Trade never hands out.
pub const BANNED_MEGA_FORMES: [Species; 47] = [
    Species::VENUSAUR_MEGA,
    Species::BLASTOISE_MEGA,
    Species::CHARIZARD_MEGA_X,
    Species::CHARIZARD_MEGA_Y,
    Species::BEEDRILL_MEGA,
    Species::PIDGEOT_MEGA,
    Species::SLOWBRO_MEGA,
    Species::ALAKAZAM_MEGA,
    Species::GENGAR_MEGA,
    Species::KANGASKHAN_MEGA,
    Species::PINSIR_MEGA,
    Species::GYARADOS_MEGA,
    Species::AERODACTYL_MEGA,
    Species::MEWTWO_MEGA_X,
    Species::MEWTWO_MEGA_Y,
    Species::AMPHAROS_MEGA,
    Species::STEELIX_MEGA,
    Species::SCIZOR_MEGA,
    Species::HERACROSS_MEGA,
    Species::HOUNDOOM_MEGA,
    Species::TYRANITAR_MEGA,
    Species::BLAZIKEN_MEGA,
    Species::SCEPTILE_MEGA,
    Species::SWAMPERT_MEGA,
    Species::MAWILE_MEGA,
    Species::AGGRON_MEGA,
    Species::MEDICHAM_MEGA,
    Species::MANECTRIC_MEGA,
    Species::BANETTE_MEGA,
    Species::ABSOL_MEGA,
    Species::SABLEYE_MEGA,
    Species::SHARPEDO_MEGA,
    Species::CAMERUPT_MEGA,
    Species::ALTARIA_MEGA,
    Species::GLALIE_MEGA,
    Species::SALAMENCE_MEGA,
    Species::METAGROSS_MEGA,
    Species::RAYQUAZA_MEGA,
    Species::LATIAS_MEGA,
    Species::LATIOS_MEGA,
    Species::GARCHOMP_MEGA,
    Species::LUCARIO_MEGA,
    Species::ABOMASNOW_MEGA,
    Species::LOPUNNY_MEGA,
    Species::GALLADE_MEGA,
    Species::AUDINO_MEGA,
    Species::DIANCIE_MEGA,
];

pub fn is_banned_legendary(species: Species) -> bool {
    BANNED_LEGENDARIES.contains(&species)
}

pub fn is_banned_mega_forme(species: Species) -> bool {
    BANNED_MEGA_FORMES.contains(&species)
}
