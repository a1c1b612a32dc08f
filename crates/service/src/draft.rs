//! Request bodies for set and card writes, and their validation.

use serde::Deserialize;
use stronghold_core::{
    CardInput, Game, MAX_CARDS_PER_SET, MAX_NAME_LEN, RawCardNumber, SetInput, parse_card_list,
};

use crate::ServiceError;

const MISSING_FIELDS: &str = "Missing required fields: name, game, and cards array";

/// Body of a set create or full replace.
///
/// Cards come either as a structured `cards` array or as a free-text
/// `cardList` of `Name - Number` lines; the array wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDraft {
    pub name: Option<String>,
    pub game: Option<String>,
    pub code: Option<String>,
    #[serde(alias = "total_cards")]
    pub total_cards: Option<i64>,
    pub cards: Option<Vec<CardDraft>>,
    #[serde(alias = "card_list")]
    pub card_list: Option<String>,
}

/// Body of a single card edit, also the element type of [`SetDraft::cards`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDraft {
    pub name: Option<String>,
    pub number: Option<RawCardNumber>,
}

impl CardDraft {
    pub fn validate(self) -> Result<CardInput, ServiceError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        check_card_name(name)?;
        let number = self
            .number
            .ok_or_else(|| ServiceError::InvalidInput(format!("Card number is required for {name}")))?
            .to_number()?;
        Ok(CardInput::new(name, number))
    }
}

impl SetDraft {
    pub fn validate(self) -> Result<SetInput, ServiceError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let (false, Some(game)) = (name.is_empty(), self.game.as_deref()) else {
            return Err(ServiceError::InvalidInput(MISSING_FIELDS.to_owned()));
        };
        check_name_len("Set name", name)?;
        let game: Game = game.parse()?;

        let cards = match (self.cards, self.card_list) {
            (Some(cards), _) => cards.into_iter().map(CardDraft::validate).collect::<Result<Vec<_>, _>>()?,
            (None, Some(text)) => {
                let cards = parse_card_list(&text)?;
                for card in &cards {
                    check_card_name(&card.name)?;
                }
                cards
            },
            (None, None) => return Err(ServiceError::InvalidInput(MISSING_FIELDS.to_owned())),
        };
        if cards.len() > MAX_CARDS_PER_SET {
            return Err(ServiceError::InvalidInput(format!(
                "A set may hold at most {MAX_CARDS_PER_SET} cards"
            )));
        }

        let code = self.code.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty());
        Ok(SetInput { name: name.to_owned(), game, code, total_cards: total_cards(self.total_cards)?, cards })
    }
}

/// Zero means "not declared"; negative or oversized values are rejected.
fn total_cards(raw: Option<i64>) -> Result<Option<i32>, ServiceError> {
    match raw {
        None | Some(0) => Ok(None),
        Some(n) if n < 0 => {
            Err(ServiceError::InvalidInput("Total cards must not be negative".to_owned()))
        },
        Some(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| ServiceError::InvalidInput(format!("Total cards is too large: {n}"))),
    }
}

/// Rules shared by structured cards and parsed `Name - Number` lines.
fn check_card_name(name: &str) -> Result<(), ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::InvalidInput("Card name is required".to_owned()));
    }
    check_name_len("Card name", name)
}

fn check_name_len(what: &str, name: &str) -> Result<(), ServiceError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::InvalidInput(format!(
            "{what} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: serde_json::Value) -> SetDraft {
        serde_json::from_value(json).unwrap()
    }

    fn invalid_message(result: Result<SetInput, ServiceError>) -> String {
        match result {
            Err(ServiceError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_structured_cards_accept_numeric_strings() {
        let input = draft(serde_json::json!({
            "name": "  Base Set ",
            "game": "pokemon",
            "code": " BS ",
            "totalCards": 102,
            "cards": [{"name": "Alakazam", "number": 1}, {"name": " Blastoise ", "number": "2"}]
        }))
        .validate()
        .unwrap();
        assert_eq!(input.name, "Base Set");
        assert_eq!(input.game, Game::Pokemon);
        assert_eq!(input.code.as_deref(), Some("BS"));
        assert_eq!(input.total_cards, Some(102));
        assert_eq!(input.cards, vec![CardInput::new("Alakazam", 1), CardInput::new("Blastoise", 2)]);
    }

    #[test]
    fn test_card_list_text_is_parsed() {
        let input = draft(serde_json::json!({
            "name": "Alpha",
            "game": "Magic",
            "cardList": "Black Lotus - 232\nMox-Pearl - 263\nBadLine"
        }))
        .validate()
        .unwrap();
        assert_eq!(input.game, Game::Magic);
        assert_eq!(
            input.cards,
            vec![
                CardInput::new("Black Lotus", 232),
                CardInput::new("Mox-Pearl", 263),
                CardInput::new("BadLine", 0),
            ]
        );
    }

    #[test]
    fn test_empty_card_list_text_is_rejected() {
        let msg = invalid_message(
            draft(serde_json::json!({"name": "A", "game": "other", "cardList": " \n \n"})).validate(),
        );
        assert_eq!(msg, "Please enter at least one card");
    }

    #[test]
    fn test_card_list_lines_get_card_name_checks() {
        let msg = invalid_message(
            draft(serde_json::json!({"name": "A", "game": "pokemon", "cardList": " - 5\nOk - 6"}))
                .validate(),
        );
        assert_eq!(msg, "Card name is required");

        let long_line = format!("{} - 1", "x".repeat(MAX_NAME_LEN + 1));
        let msg = invalid_message(
            draft(serde_json::json!({"name": "A", "game": "pokemon", "cardList": long_line}))
                .validate(),
        );
        assert!(msg.starts_with("Card name must be at most"));
    }

    #[test]
    fn test_empty_cards_array_is_allowed() {
        let input =
            draft(serde_json::json!({"name": "A", "game": "other", "cards": []})).validate().unwrap();
        assert!(input.cards.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            serde_json::json!({"game": "pokemon", "cards": []}),
            serde_json::json!({"name": "   ", "game": "pokemon", "cards": []}),
            serde_json::json!({"name": "A", "cards": []}),
            serde_json::json!({"name": "A", "game": "pokemon"}),
        ] {
            assert_eq!(invalid_message(draft(body).validate()), MISSING_FIELDS);
        }
    }

    #[test]
    fn test_unknown_game_lists_valid_games() {
        let msg = invalid_message(
            draft(serde_json::json!({"name": "A", "game": "chess", "cards": []})).validate(),
        );
        assert_eq!(msg, "Invalid game type. Must be one of: pokemon, lorcana, magic, yugioh, other");
    }

    #[test]
    fn test_total_cards_rules() {
        let base = |total: i64| {
            draft(serde_json::json!({"name": "A", "game": "lorcana", "cards": [], "total_cards": total}))
                .validate()
        };
        assert_eq!(base(0).unwrap().total_cards, None);
        assert_eq!(base(204).unwrap().total_cards, Some(204));
        assert_eq!(invalid_message(base(-1)), "Total cards must not be negative");
        assert!(base(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn test_blank_code_becomes_none() {
        let input = draft(serde_json::json!({"name": "A", "game": "yugioh", "code": "  ", "cards": []}))
            .validate()
            .unwrap();
        assert_eq!(input.code, None);
    }

    #[test]
    fn test_card_validation() {
        let blank = CardDraft { name: Some(" ".to_owned()), number: Some(RawCardNumber::Int(1)) };
        assert!(matches!(blank.validate(), Err(ServiceError::InvalidInput(_))));

        let text = CardDraft {
            name: Some("Pikachu".to_owned()),
            number: Some(RawCardNumber::Text("abc".to_owned())),
        };
        assert!(matches!(text.validate(), Err(ServiceError::InvalidInput(_))));

        let missing = CardDraft { name: Some("Pikachu".to_owned()), number: None };
        assert!(matches!(missing.validate(), Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let msg =
            invalid_message(draft(serde_json::json!({"name": long, "game": "magic", "cards": []})).validate());
        assert!(msg.starts_with("Set name must be at most"));
    }
}
