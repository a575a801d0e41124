use pawmatch_core::*;
use web_time::{Duration, Instant};

fn two_symbol_catalog() -> Catalog {
    Catalog::new(vec![Symbol::new("A", "a.png"), Symbol::new("B", "b.png")]).unwrap()
}

fn positions_of(engine: &MatchEngine, symbol: SymbolId) -> Vec<CardIndex> {
    engine
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.symbol() == symbol)
        .map(|(index, _)| index as CardIndex)
        .collect()
}

#[test]
fn two_pair_game_played_to_completion() {
    let catalog = two_symbol_catalog();
    let mut engine = start_new_game(&catalog, 2024, 1);
    assert_eq!(engine.card_count(), 4);

    let a = positions_of(&engine, 0);
    let b = positions_of(&engine, 1);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);

    let t0 = Instant::now();
    assert_eq!(engine.select(a[1], t0).unwrap(), SelectOutcome::Flipped);
    assert_eq!(engine.select(a[0], t0).unwrap(), SelectOutcome::Matched);
    assert_eq!(engine.matched_pairs(), 1);

    assert_eq!(engine.select(b[0], t0).unwrap(), SelectOutcome::Flipped);
    let outcome = engine.select(b[1], t0 + Duration::from_secs(12)).unwrap();
    assert_eq!(outcome, SelectOutcome::Won { elapsed_secs: 12 });
    assert_eq!(engine.matched_pairs(), 2);
    assert!(engine.is_complete());
}

#[test]
fn mismatch_turns_back_after_reveal_delay() {
    let catalog = two_symbol_catalog();
    let mut engine = start_new_game(&catalog, 7, 1);
    let a = positions_of(&engine, 0);
    let b = positions_of(&engine, 1);

    let t0 = Instant::now();
    engine.select(a[0], t0).unwrap();
    let SelectOutcome::Mismatched(token) = engine.select(b[0], t0).unwrap() else {
        panic!("A then B must mismatch");
    };

    let later = t0 + MISMATCH_REVEAL_DURATION + Duration::from_millis(1);
    assert_eq!(engine.resolve_mismatch(token, later), ResolveOutcome::Unflipped);
    assert_eq!(engine.matched_pairs(), 0);
    assert!(engine.cards().iter().all(|card| card.face() == CardFace::Hidden));
    assert!(!engine.is_locked());
}

#[test]
fn completion_is_reported_exactly_once() {
    let catalog = two_symbol_catalog();
    let mut engine = start_new_game(&catalog, 99, 3);
    let t0 = Instant::now();

    let mut wins = 0;
    for symbol in catalog.ids() {
        for index in positions_of(&engine, symbol) {
            if let SelectOutcome::Won { .. } = engine.select(index, t0).unwrap() {
                wins += 1;
            }
        }
    }
    for index in 0..engine.card_count() as CardIndex {
        assert_eq!(engine.select(index, t0).unwrap(), SelectOutcome::Ignored);
    }

    assert_eq!(wins, 1);
}

#[test]
fn catalog_loads_from_toml_and_rejects_duplicates() {
    #[derive(serde::Deserialize)]
    struct CatalogFile {
        symbols: Catalog,
    }

    let good: CatalogFile = toml::from_str(
        r#"
        [[symbols]]
        name = "heart_mouse"
        asset = "char1_heart_mouse.png"

        [[symbols]]
        name = "star_mouse"
        asset = "char2_star_mouse.png"
        "#,
    )
    .unwrap();
    assert_eq!(good.symbols.len(), 2);
    assert_eq!(good.symbols[1].asset, "char2_star_mouse.png");

    let duplicate = toml::from_str::<CatalogFile>(
        r#"
        [[symbols]]
        name = "heart_mouse"
        asset = "a.png"

        [[symbols]]
        name = "heart_mouse"
        asset = "b.png"
        "#,
    );
    let err = duplicate.err().unwrap().to_string();
    assert!(err.contains("heart_mouse"), "{err}");
}
