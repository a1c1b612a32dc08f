//! Double-sided print pagination.
//!
//! Cards print nine to a sheet. Every sheet of fronts is followed by a sheet of
//! backs so a duplex printer lines each back up behind its front. Backs carry no
//! per-card data; the last back sheet only needs as many backs as the last front
//! sheet has cards.

use std::iter::FusedIterator;
use std::ops::Range;

use serde::Serialize;

use crate::set::SetWithCards;

/// Cards on one printed sheet (3×3).
pub const CARDS_PER_SHEET: usize = 9;

/// One printed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sheet<'a, T> {
    /// Card fronts in their original order.
    Front { page: usize, cards: &'a [T] },
    /// Uniform backs for the cards at `covers`.
    Back { page: usize, covers: Range<usize> },
}

impl<T> Sheet<'_, T> {
    /// Number of card slots used on this sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Front { cards, .. } => cards.len(),
            Self::Back { covers, .. } => covers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A back sheet that is not full: the trailing `N mod 9` group.
    #[must_use]
    pub fn is_remainder_back(&self) -> bool {
        matches!(self, Self::Back { covers, .. } if covers.len() < CARDS_PER_SHEET)
    }
}

/// Lazy front/back sheet sequence over an ordered card slice.
///
/// Pure function of the slice: cloning restarts it, and it never allocates.
#[derive(Debug, Clone)]
pub struct PrintLayout<'a, T> {
    cards: &'a [T],
    next_card: usize,
    next_page: usize,
    pending_back: Option<Range<usize>>,
}

impl<'a, T> PrintLayout<'a, T> {
    #[must_use]
    pub fn new(cards: &'a [T]) -> Self {
        Self { cards, next_card: 0, next_page: 0, pending_back: None }
    }

    fn remaining(&self) -> usize {
        let fronts_left = self.cards.len().saturating_sub(self.next_card).div_ceil(CARDS_PER_SHEET);
        fronts_left * 2 + usize::from(self.pending_back.is_some())
    }
}

impl<'a, T> Iterator for PrintLayout<'a, T> {
    type Item = Sheet<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(covers) = self.pending_back.take() {
            let page = self.next_page;
            self.next_page += 1;
            return Some(Sheet::Back { page, covers });
        }
        if self.next_card >= self.cards.len() {
            return None;
        }
        let start = self.next_card;
        let end = (start + CARDS_PER_SHEET).min(self.cards.len());
        let page = self.next_page;
        self.next_card = end;
        self.next_page += 1;
        self.pending_back = Some(start..end);
        Some(Sheet::Front { page, cards: &self.cards[start..end] })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for PrintLayout<'_, T> {}

impl<T> FusedIterator for PrintLayout<'_, T> {}

/// Sizes of the back groups needed for `card_count` cards.
///
/// `floor(n / 9)` groups of nine, then one group of `n mod 9` when non-zero.
/// Negative counts are treated as zero.
#[must_use]
pub fn back_group_sizes(card_count: i64) -> Vec<usize> {
    let n = usize::try_from(card_count.max(0)).unwrap_or(usize::MAX);
    let mut sizes = vec![CARDS_PER_SHEET; n / CARDS_PER_SHEET];
    let remainder = n % CARDS_PER_SHEET;
    if remainder != 0 {
        sizes.push(remainder);
    }
    sizes
}

/// Front face of one card as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFace {
    pub set_name: String,
    pub name: String,
    pub number: i32,
    pub total: i64,
}

impl CardFace {
    /// The `number/total` corner label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.number, self.total)
    }
}

/// Owned, serializable form of a [`Sheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "side", rename_all = "lowercase")]
pub enum PrintedSheet {
    Front { page: usize, cards: Vec<PrintedFace> },
    Back { page: usize, count: usize, remainder: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintedFace {
    pub name: String,
    pub number: i32,
    pub label: String,
}

/// Complete print job for one set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintPlan {
    pub set_id: String,
    pub set_name: String,
    pub total: i64,
    pub card_count: usize,
    pub sheets: Vec<PrintedSheet>,
}

impl PrintPlan {
    #[must_use]
    pub fn for_set(set: &SetWithCards) -> Self {
        let faces = card_faces(set);
        let sheets = PrintLayout::new(&faces)
            .map(|sheet| {
                let remainder = sheet.is_remainder_back();
                match sheet {
                    Sheet::Front { page, cards } => PrintedSheet::Front {
                        page,
                        cards: cards
                            .iter()
                            .map(|f| PrintedFace {
                                name: f.name.clone(),
                                number: f.number,
                                label: f.label(),
                            })
                            .collect(),
                    },
                    Sheet::Back { page, covers } => {
                        PrintedSheet::Back { page, count: covers.len(), remainder }
                    },
                }
            })
            .collect();
        Self {
            set_id: set.set.id.clone(),
            set_name: set.set.name.clone(),
            total: set.effective_total(),
            card_count: set.cards.len(),
            sheets,
        }
    }
}

/// Card faces in print order for a set.
#[must_use]
pub fn card_faces(set: &SetWithCards) -> Vec<CardFace> {
    let total = set.effective_total();
    set.cards
        .iter()
        .map(|c| CardFace {
            set_name: set.set.name.clone(),
            name: c.name.clone(),
            number: c.number,
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::set::{Card, CardSet};
    use chrono::Utc;

    fn backs(n: usize) -> Vec<usize> {
        let cards: Vec<usize> = (0..n).collect();
        PrintLayout::new(&cards)
            .filter_map(|s| match s {
                Sheet::Back { covers, .. } => Some(covers.len()),
                Sheet::Front { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_cards_produce_no_sheets() {
        let cards: Vec<u8> = Vec::new();
        assert_eq!(PrintLayout::new(&cards).count(), 0);
        assert!(back_group_sizes(0).is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_remainder_group() {
        assert_eq!(backs(9), vec![9]);
        assert_eq!(backs(18), vec![9, 9]);
        assert_eq!(back_group_sizes(9), vec![9]);
    }

    #[test]
    fn test_ten_cards_add_trailing_group_of_one() {
        assert_eq!(backs(10), vec![9, 1]);
        assert_eq!(back_group_sizes(10), vec![9, 1]);
    }

    #[test]
    fn test_seventeen_cards_add_trailing_group_of_eight() {
        assert_eq!(backs(17), vec![9, 8]);
    }

    #[test]
    fn test_fewer_than_nine_is_single_trailing_group() {
        for n in 1..CARDS_PER_SHEET {
            assert_eq!(backs(n), vec![n], "n = {n}");
        }
    }

    #[test]
    fn test_back_groups_cover_every_card() {
        for n in 0..60usize {
            let sizes = back_group_sizes(i64::try_from(n).unwrap());
            assert_eq!(sizes.iter().sum::<usize>(), n);
            assert_eq!(sizes.iter().filter(|s| **s == CARDS_PER_SHEET).count(), n / 9);
            assert_eq!(sizes.len(), n.div_ceil(9));
            assert_eq!(backs(n), sizes, "layout and count-only form disagree at n = {n}");
        }
    }

    #[test]
    fn test_negative_count_is_treated_as_zero() {
        assert!(back_group_sizes(-4).is_empty());
    }

    #[test]
    fn test_sheets_alternate_and_keep_order() {
        let cards: Vec<usize> = (0..11).collect();
        let sheets: Vec<_> = PrintLayout::new(&cards).collect();
        assert_eq!(sheets.len(), 4);
        assert_eq!(sheets[0], Sheet::Front { page: 0, cards: &cards[0..9] });
        assert_eq!(sheets[1], Sheet::Back { page: 1, covers: 0..9 });
        assert_eq!(sheets[2], Sheet::Front { page: 2, cards: &cards[9..11] });
        assert_eq!(sheets[3], Sheet::Back { page: 3, covers: 9..11 });
        assert!(!sheets[1].is_remainder_back());
        assert!(sheets[3].is_remainder_back());
    }

    #[test]
    fn test_layout_is_exact_size_and_restartable() {
        let cards: Vec<usize> = (0..20).collect();
        let layout = PrintLayout::new(&cards);
        assert_eq!(layout.len(), 6);
        let first: Vec<_> = layout.clone().collect();
        let second: Vec<_> = layout.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_print_plan_labels_use_effective_total() {
        let now = Utc::now();
        let set = SetWithCards {
            set: CardSet {
                id: "s1".to_owned(),
                name: "The First Chapter".to_owned(),
                game: Game::Lorcana,
                code: Some("1".to_owned()),
                total_cards: None,
                created_at: now,
                updated_at: now,
            },
            cards: (1..=10)
                .map(|n| Card {
                    id: format!("c{n}"),
                    set_id: "s1".to_owned(),
                    name: format!("Card {n}"),
                    number: n,
                    created_at: now,
                })
                .collect(),
        };
        let plan = PrintPlan::for_set(&set);
        assert_eq!(plan.total, 10);
        assert_eq!(plan.sheets.len(), 4);
        match &plan.sheets[0] {
            PrintedSheet::Front { cards, .. } => {
                assert_eq!(cards.len(), 9);
                assert_eq!(cards[0].label, "1/10");
            },
            other => panic!("expected front sheet, got {other:?}"),
        }
        assert_eq!(plan.sheets[3], PrintedSheet::Back { page: 3, count: 1, remainder: true });

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["sheets"][1]["side"], "back");
        assert_eq!(json["sheets"][1]["count"], 9);
    }
}
