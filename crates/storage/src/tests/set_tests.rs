use super::{create_test_input, create_test_storage};
use crate::{SetStore, StorageError};
use stronghold_core::Game;

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn create_then_get_returns_cards_by_number() {
    let storage = create_test_storage();
    let input = create_test_input(
        "Base Set",
        Game::Pokemon,
        &[("Venusaur", 15), ("Alakazam", 1), ("Charizard", 4)],
    );

    let created = storage.create_set(&input).await.unwrap();
    let fetched = storage.get_set(&created.set.id).await.unwrap().unwrap();

    assert_eq!(fetched.set.name, "Base Set");
    assert_eq!(fetched.set.game, Game::Pokemon);
    let numbers: Vec<i32> = fetched.cards.iter().map(|c| c.number).collect();
    assert_eq!(numbers, vec![1, 4, 15]);
    assert!(fetched.cards.iter().all(|c| c.set_id == created.set.id));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn get_unknown_set_is_none() {
    let storage = create_test_storage();
    assert!(storage.get_set("missing").await.unwrap().is_none());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn update_replaces_the_whole_card_list() {
    let storage = create_test_storage();
    let created = storage
        .create_set(&create_test_input("Alpha", Game::Magic, &[("A", 1), ("B", 2), ("C", 3)]))
        .await
        .unwrap();
    let old_ids: Vec<String> = created.cards.iter().map(|c| c.id.clone()).collect();

    let mut replacement = create_test_input("Alpha (revised)", Game::Magic, &[("Z", 9)]);
    replacement.code = Some("LEA".to_owned());
    let updated = storage.update_set(&created.set.id, &replacement).await.unwrap().unwrap();

    assert_eq!(updated.set.name, "Alpha (revised)");
    assert_eq!(updated.set.code.as_deref(), Some("LEA"));
    assert_eq!(updated.cards.len(), 1);
    assert_eq!(updated.cards[0].name, "Z");
    assert!(!old_ids.contains(&updated.cards[0].id));
    assert!(updated.set.updated_at >= created.set.updated_at);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn update_unknown_set_is_none() {
    let storage = create_test_storage();
    let input = create_test_input("Nope", Game::Other, &[]);
    assert!(storage.update_set("missing", &input).await.unwrap().is_none());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn duplicate_numbers_are_rejected_without_side_effects() {
    let storage = create_test_storage();
    let input = create_test_input("Dupes", Game::Lorcana, &[("A", 1), ("B", 1)]);

    let err = storage.create_set(&input).await.unwrap_err();
    assert!(err.is_duplicate(), "got {err:?}");
    assert!(storage.list_sets(None).await.unwrap().is_empty());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn failed_update_keeps_previous_set_and_cards() {
    let storage = create_test_storage();
    let created = storage
        .create_set(&create_test_input("Keep", Game::Pokemon, &[("A", 1), ("B", 2)]))
        .await
        .unwrap();

    let replacement = create_test_input("Renamed", Game::Magic, &[("X", 5), ("Y", 5)]);
    let err = storage.update_set(&created.set.id, &replacement).await.unwrap_err();
    assert!(err.is_duplicate(), "got {err:?}");

    let after = storage.get_set(&created.set.id).await.unwrap().unwrap();
    assert_eq!(after.set, created.set);
    assert_eq!(after.cards, created.cards);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn list_counts_cards_and_filters_by_game() {
    let storage = create_test_storage();
    storage
        .create_set(&create_test_input("Older", Game::Pokemon, &[("A", 1), ("B", 2)]))
        .await
        .unwrap();
    storage.create_set(&create_test_input("Newer", Game::Yugioh, &[])).await.unwrap();

    let all = storage.list_sets(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].set.name, "Newer");
    assert_eq!(all[0].card_count, 0);
    assert_eq!(all[1].card_count, 2);

    let pokemon = storage.list_sets(Some(Game::Pokemon)).await.unwrap();
    assert_eq!(pokemon.len(), 1);
    assert_eq!(pokemon[0].set.name, "Older");
    assert!(storage.list_sets(Some(Game::Magic)).await.unwrap().is_empty());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn delete_set_cascades_to_cards() {
    let storage = create_test_storage();
    let created = storage
        .create_set(&create_test_input("Gone", Game::Other, &[("A", 1)]))
        .await
        .unwrap();
    let card_id = created.cards[0].id.clone();

    let deleted = storage.delete_set(&created.set.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, created.set.id);
    assert!(storage.get_set(&created.set.id).await.unwrap().is_none());
    assert!(storage.delete_set(&created.set.id).await.unwrap().is_none());

    let err = storage.delete_card(&created.set.id, &card_id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "set", .. }));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn ping_reports_a_timestamp() {
    let storage = create_test_storage();
    let before = chrono::Utc::now();
    assert!(storage.ping().await.unwrap() >= before);
}
