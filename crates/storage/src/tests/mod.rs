//! Test utilities and module declarations for storage tests.

use stronghold_core::{CardInput, Game, SetInput};

use crate::MemoryStorage;

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

pub fn create_test_input(name: &str, game: Game, cards: &[(&str, i32)]) -> SetInput {
    SetInput {
        name: name.to_owned(),
        game,
        code: None,
        total_cards: None,
        cards: cards.iter().map(|(n, num)| CardInput::new(*n, *num)).collect(),
    }
}

mod set_tests;
