//! Core types for stronghold
//!
//! Domain records for card sets, the free-text card list format, and the
//! double-sided print layout. Shared by storage, service, http and cli crates.

mod card_list;
pub mod constants;
mod env_config;
mod error;
mod game;
pub mod print;
mod set;

pub use card_list::{format_card_list, parse_card_list};
pub use constants::*;
pub use env_config::{PoolSettings, env_parse_with_default};
pub use error::{CoreError, Result};
pub use game::Game;
pub use print::{CARDS_PER_SHEET, PrintLayout, PrintPlan, Sheet, back_group_sizes};
pub use set::{Card, CardInput, CardSet, RawCardNumber, SetInput, SetSummary, SetWithCards};
