use crate::{Move, PokemonType, Species};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    TmDig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    /// Stats in HP, ATK, DEF, SP.ATK, SP.DEF, SPD order.
    pub fn as_array(&self) -> [u8; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
    }

    pub fn total(&self) -> u16 {
        self.as_array().iter().map(|&stat| stat as u16).sum()
    }

    /// Placeholder table entries carry no stats at all.
    pub fn is_unimplemented(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Learnset {
    #[serde(default)]
    pub level_up: HashMap<u8, Vec<Move>>, // level -> moves learned at that level
    #[serde(default)]
    pub teachable: Vec<Move>, // Moves learnable from TMs and tutors
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub species: Species,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub learnset: Learnset,
}

impl Learnset {
    pub fn can_learn_teachable_move(&self, move_: Move) -> bool {
        self.teachable.contains(&move_)
    }

    /// Moves known at `level`: the four most recently learned level-up moves.
    pub fn moves_known_at_level(&self, level: u8) -> Vec<Move> {
        let mut learned_moves = Vec::new();

        for learn_level in 1..=level {
            if let Some(moves_at_level) = self.level_up.get(&learn_level) {
                for &move_ in moves_at_level {
                    if !learned_moves.contains(&move_) {
                        learned_moves.push(move_);
                    }
                }
            }
        }

        if learned_moves.len() <= 4 {
            learned_moves
        } else {
            learned_moves.split_off(learned_moves.len() - 4)
        }
    }
}
