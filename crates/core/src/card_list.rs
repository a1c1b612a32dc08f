//! Free-text card lists, one `Name - Number` entry per line.

use crate::error::CoreError;
use crate::set::{Card, CardInput};

/// Parse a pasted card list.
///
/// Each non-blank line is split on its last `-`, so names may contain hyphens.
/// The number is read from the leading digits (`12a` is 12); no digits or an
/// out-of-range value gives 0. A line without any `-` is taken as a name with
/// number 0. Fails only when no card remains.
pub fn parse_card_list(text: &str) -> Result<Vec<CardInput>, CoreError> {
    let cards: Vec<CardInput> =
        text.lines().map(str::trim).filter(|line| !line.is_empty()).map(parse_line).collect();
    if cards.is_empty() {
        return Err(CoreError::EmptyCardList);
    }
    Ok(cards)
}

fn parse_line(line: &str) -> CardInput {
    match line.rsplit_once('-') {
        Some((name, number)) => CardInput::new(name.trim(), leading_number(number.trim())),
        None => CardInput::new(line, 0),
    }
}

fn leading_number(text: &str) -> i32 {
    let digits = text.strip_prefix('+').unwrap_or(text);
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

/// Render cards back into the editable text form.
#[must_use]
pub fn format_card_list(cards: &[Card]) -> String {
    cards.iter().map(|c| format!("{} - {}", c.name, c.number)).collect::<Vec<_>>().join("\n")
}
