//! Game integration tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use setrs::{
    Card, DECK_SIZE, DealOutcome, Game, GameOptions, MATCHES_PER_GAME, MatchOutcome,
    NewGameError, Resolution, SelectError, SelectOutcome, SelectionPhase, SharedGame, Slot,
    full_deck, is_match,
};

fn new_game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed).unwrap()
}

/// Deals from `seed` onward until the opening table holds a match.
fn game_with_match(options: GameOptions, seed: u64) -> (Game, [usize; 3]) {
    (seed..)
        .find_map(|seed| {
            let game = Game::new(options, seed).unwrap();
            game.hint().map(|triple| (game, triple))
        })
        .unwrap()
}

fn occupied(game: &Game) -> Vec<usize> {
    (0..game.slots().len())
        .filter(|&index| game.card_at(index).is_some())
        .collect()
}

fn find_mismatch(game: &Game) -> [usize; 3] {
    let slots = occupied(game);
    for (i, &a) in slots.iter().enumerate() {
        for (j, &b) in slots.iter().enumerate().skip(i + 1) {
            for &c in slots.iter().skip(j + 1) {
                let cards = [a, b, c].map(|index| game.card_at(index).unwrap());
                if !is_match(&cards[0], &cards[1], &cards[2]) {
                    return [a, b, c];
                }
            }
        }
    }
    panic!("every triple on the table matches");
}

fn select_all(game: &mut Game, slots: [usize; 3]) -> SelectOutcome {
    game.select_card(slots[0]).unwrap();
    game.select_card(slots[1]).unwrap();
    game.select_card(slots[2]).unwrap()
}

fn cards_at(game: &Game, slots: [usize; 3]) -> [Card; 3] {
    slots.map(|index| game.card_at(index).unwrap())
}

#[test]
fn deck_contains_every_combination_once() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let combinations: HashSet<_> = deck.iter().map(Card::features).collect();
    assert_eq!(combinations.len(), DECK_SIZE);

    let ids: HashSet<_> = deck.iter().map(Card::id).collect();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn new_game_deals_initial_cards() {
    let game = new_game(1);

    assert_eq!(game.slots().len(), 12);
    assert_eq!(game.playing_cards().len(), 12);
    assert_eq!(game.deck_cursor(), 12);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 12);
    assert_eq!(game.score(), 0);
    assert_eq!(game.matches_found(), 0);
    assert_eq!(game.phase(), SelectionPhase::Idle);
    assert!(game.selected_cards().is_empty());
    assert!(game.matched_cards().is_empty());
    assert!(game.pending_removal().is_empty());
}

#[test]
fn new_game_resets_state() {
    let mut game = new_game(2);
    let mismatch = find_mismatch(&game);
    select_all(&mut game, mismatch);
    game.request_more_cards();
    assert_eq!(game.score(), -1);

    game.new_game(9).unwrap();
    assert_eq!(game.slots().len(), 9);
    assert_eq!(game.deck_cursor(), 9);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), SelectionPhase::Idle);
    assert!(game.selected_cards().is_empty());
}

#[test]
fn oversized_initial_count_is_rejected() {
    let mut game = new_game(3);
    game.select_card(0).unwrap();
    let before = game.playing_cards();

    assert_eq!(
        game.new_game(DECK_SIZE + 1).unwrap_err(),
        NewGameError::InvalidConfiguration {
            requested: DECK_SIZE + 1,
            max: DECK_SIZE,
        }
    );
    assert_eq!(game.playing_cards(), before);
    assert_eq!(game.selected_cards().len(), 1);
    assert_eq!(game.deck_cursor(), 12);

    let options = GameOptions::default().with_initial_cards(100);
    assert!(matches!(
        Game::new(options, 3),
        Err(NewGameError::InvalidConfiguration { requested: 100, .. })
    ));
}

#[test]
fn same_seed_deals_same_table() {
    assert_eq!(new_game(9).playing_cards(), new_game(9).playing_cards());
}

#[test]
fn selecting_twice_toggles() {
    let mut game = new_game(4);
    let card = game.card_at(5).unwrap();

    assert_eq!(game.select_card(5), Ok(SelectOutcome::Selected));
    assert!(game.is_selected(card));
    assert_eq!(game.phase(), SelectionPhase::Selecting(1));

    assert_eq!(game.select_card(5), Ok(SelectOutcome::Deselected));
    assert!(!game.is_selected(card));
    assert_eq!(game.phase(), SelectionPhase::Idle);
    assert_eq!(game.score(), 0);
}

#[test]
fn match_scores_and_stays_selected() {
    let (mut game, triple) = game_with_match(GameOptions::default(), 5);
    let cards = cards_at(&game, triple);

    assert_eq!(select_all(&mut game, triple), SelectOutcome::Matched);
    assert_eq!(game.score(), 3);
    assert_eq!(game.matches_found(), 1);
    assert_eq!(game.matched_cards(), &cards);
    assert_eq!(game.selected_cards(), &cards);
    assert!(cards.iter().all(|&card| game.is_matched(card)));
    assert_eq!(
        game.phase(),
        SelectionPhase::AwaitingResolution(MatchOutcome::Match)
    );
    assert_eq!(game.deck_cursor(), 12);
}

#[test]
fn mismatch_costs_one_point() {
    let mut game = new_game(6);
    let triple = find_mismatch(&game);

    assert_eq!(select_all(&mut game, triple), SelectOutcome::Mismatched);
    assert_eq!(game.score(), -1);
    assert_eq!(game.matches_found(), 0);
    assert!(game.matched_cards().is_empty());
    assert_eq!(game.selected_cards().len(), 3);

    // The next click clears the mismatch without touching the table.
    let before = game.playing_cards();
    let other = occupied(&game)
        .into_iter()
        .find(|index| !triple.contains(index))
        .unwrap();
    assert_eq!(game.select_card(other), Ok(SelectOutcome::Selected));
    assert_eq!(game.playing_cards(), before);
    assert_eq!(game.selected_cards(), &[game.card_at(other).unwrap()]);
    assert_eq!(game.score(), -1);
}

#[test]
fn fourth_click_replaces_matched_slots_first() {
    let (mut game, triple) = game_with_match(GameOptions::default(), 7);
    let matched = cards_at(&game, triple);
    select_all(&mut game, triple);

    let other = occupied(&game)
        .into_iter()
        .find(|index| !triple.contains(index))
        .unwrap();
    let other_card = game.card_at(other).unwrap();

    assert_eq!(game.select_card(other), Ok(SelectOutcome::Selected));
    assert_eq!(game.selected_cards(), &[other_card]);
    assert_eq!(game.slots().len(), 12);
    assert_eq!(game.deck_cursor(), 15);
    for index in triple {
        let card = game.card_at(index).unwrap();
        assert!(!matched.contains(&card));
        assert!(!game.is_matched(card));
    }
    assert_eq!(game.score(), 3);
}

#[test]
fn clicking_a_matched_slot_selects_its_replacement() {
    let (mut game, triple) = game_with_match(GameOptions::default(), 8);
    select_all(&mut game, triple);

    assert_eq!(game.select_card(triple[0]), Ok(SelectOutcome::Selected));
    let replacement = game.card_at(triple[0]).unwrap();
    assert_eq!(game.selected_cards(), &[replacement]);
    assert!(!game.is_matched(replacement));
}

#[test]
fn request_deals_three_new_slots() {
    let mut game = new_game(10);
    let before = game.playing_cards();

    assert_eq!(game.request_more_cards(), DealOutcome::Dealt(3));
    assert_eq!(game.slots().len(), 15);
    assert_eq!(game.deck_cursor(), 15);
    assert_eq!(&game.playing_cards()[..12], before.as_slice());
}

#[test]
fn request_resolves_pending_match_instead_of_dealing() {
    let (mut game, triple) = game_with_match(GameOptions::default(), 11);
    select_all(&mut game, triple);

    assert_eq!(
        game.request_more_cards(),
        DealOutcome::Resolved(Resolution::Replaced {
            replaced: 3,
            unfilled: 0,
        })
    );
    assert_eq!(game.slots().len(), 12);
    assert_eq!(game.deck_cursor(), 15);
    assert_eq!(game.phase(), SelectionPhase::Idle);
    assert!(game.selected_cards().is_empty());
}

#[test]
fn request_with_pending_mismatch_still_deals() {
    let mut game = new_game(12);
    let triple = find_mismatch(&game);
    select_all(&mut game, triple);

    assert_eq!(game.request_more_cards(), DealOutcome::Dealt(3));
    assert_eq!(
        game.phase(),
        SelectionPhase::AwaitingResolution(MatchOutcome::Mismatch)
    );
    assert_eq!(game.selected_cards().len(), 3);
}

#[test]
fn invalid_slots_change_nothing() {
    let (mut game, triple) = game_with_match(GameOptions::default(), 13);
    select_all(&mut game, triple);

    let selected = game.selected_cards().to_vec();
    let matched = game.matched_cards().to_vec();
    let phase = game.phase();

    assert_eq!(
        game.select_card(12),
        Err(SelectError::InvalidSlot { index: 12 })
    );
    assert_eq!(
        game.select_card(usize::MAX),
        Err(SelectError::InvalidSlot { index: usize::MAX })
    );

    assert_eq!(game.score(), 3);
    assert_eq!(game.selected_cards(), selected.as_slice());
    assert_eq!(game.matched_cards(), matched.as_slice());
    assert_eq!(game.deck_cursor(), 12);
    assert_eq!(game.phase(), phase);
}

#[test]
fn empty_slots_change_nothing() {
    let mut game = Game::new(GameOptions::default().with_initial_cards(DECK_SIZE), 20).unwrap();
    let retired = game.hint().unwrap();
    select_all(&mut game, retired);
    game.request_more_cards();
    assert_eq!(game.clear_pending_removal(), 3);

    let next = game.hint().unwrap();
    game.select_card(next[0]).unwrap();
    game.select_card(next[1]).unwrap();

    let selected = game.selected_cards().to_vec();
    let matched = game.matched_cards().to_vec();

    for index in retired {
        assert_eq!(game.slots()[index], Slot::Empty);
        assert_eq!(
            game.select_card(index),
            Err(SelectError::InvalidSlot { index })
        );
    }

    assert_eq!(game.score(), 3);
    assert_eq!(game.selected_cards(), selected.as_slice());
    assert_eq!(game.matched_cards(), matched.as_slice());
    assert_eq!(game.deck_cursor(), DECK_SIZE);
    assert_eq!(game.phase(), SelectionPhase::Selecting(2));
}

#[test]
fn extreme_scoring_saturates() {
    let options = GameOptions::default()
        .with_match_reward(i32::MAX)
        .with_mismatch_penalty(i32::MIN);
    let (mut game, triple) = game_with_match(options, 21);

    let mismatch = find_mismatch(&game);
    assert_eq!(select_all(&mut game, mismatch), SelectOutcome::Mismatched);
    assert_eq!(game.score(), i32::MAX);

    assert_eq!(select_all(&mut game, triple), SelectOutcome::Matched);
    assert_eq!(game.score(), i32::MAX);
    assert_eq!(game.matches_found(), 1);

    let options = GameOptions::default().with_mismatch_penalty(i32::MAX);
    let mut game = Game::new(options, 22).unwrap();
    let mismatch = find_mismatch(&game);
    select_all(&mut game, mismatch);
    let mismatch = find_mismatch(&game);
    select_all(&mut game, mismatch);
    assert_eq!(game.score(), i32::MIN);
}

#[test]
fn exhausted_deck_retires_matched_slots() {
    let mut game = new_game(14);
    game.new_game(DECK_SIZE).unwrap();
    assert!(game.deck_exhausted());
    assert_eq!(game.request_more_cards(), DealOutcome::Nothing);

    let triple = game.hint().unwrap();
    let cards = cards_at(&game, triple);
    select_all(&mut game, triple);

    assert_eq!(
        game.request_more_cards(),
        DealOutcome::Resolved(Resolution::Removed)
    );
    assert_eq!(game.slots().len(), DECK_SIZE);
    assert_eq!(game.pending_removal(), &cards);
    for (index, card) in triple.into_iter().zip(cards) {
        assert_eq!(game.slots()[index], Slot::PendingRemoval(card));
        assert!(game.is_pending_removal(card));
        assert_eq!(
            game.select_card(index),
            Err(SelectError::InvalidSlot { index })
        );
    }

    assert_eq!(game.clear_pending_removal(), 3);
    assert!(game.pending_removal().is_empty());
    for index in triple {
        assert_eq!(game.slots()[index], Slot::Empty);
    }
    assert_eq!(game.playing_cards().len(), DECK_SIZE - 3);
}

#[test]
fn click_on_retired_slot_only_resolves() {
    let mut game = Game::new(GameOptions::default().with_initial_cards(DECK_SIZE), 15).unwrap();
    let triple = game.hint().unwrap();
    select_all(&mut game, triple);

    assert_eq!(game.select_card(triple[1]), Ok(SelectOutcome::Resolved));
    assert!(game.selected_cards().is_empty());
    assert_eq!(game.pending_removal().len(), 3);
}

#[test]
fn deck_running_out_mid_replacement_retires_the_rest() {
    let mut game = new_game(16);
    game.new_game(DECK_SIZE - 2).unwrap();
    let triple = game.hint().unwrap();
    let cards = cards_at(&game, triple);
    select_all(&mut game, triple);

    assert_eq!(
        game.request_more_cards(),
        DealOutcome::Resolved(Resolution::Replaced {
            replaced: 2,
            unfilled: 1,
        })
    );
    assert!(game.deck_exhausted());
    assert_eq!(game.pending_removal(), &[cards[2]]);
    assert_eq!(game.slots()[triple[2]], Slot::PendingRemoval(cards[2]));
    assert!(game.card_at(triple[0]).is_some());
    assert!(game.card_at(triple[1]).is_some());
}

#[test]
fn custom_scoring_applies() {
    let options = GameOptions::default()
        .with_match_reward(5)
        .with_mismatch_penalty(2);
    let (mut game, triple) = game_with_match(options, 17);

    let mismatch = find_mismatch(&game);
    select_all(&mut game, mismatch);
    assert_eq!(game.score(), -2);

    select_all(&mut game, triple);
    assert_eq!(game.score(), 3);
}

#[test]
fn hinted_play_keeps_books_balanced() {
    let mut game = new_game(18);
    let mut last_cursor = game.deck_cursor();

    for _ in 0..200 {
        if matches!(game.phase(), SelectionPhase::AwaitingResolution(_)) {
            assert!(matches!(
                game.request_more_cards(),
                DealOutcome::Resolved(_)
            ));
        }

        match game.hint() {
            Some(triple) => {
                assert_eq!(select_all(&mut game, triple), SelectOutcome::Matched);
            }
            None => {
                if game.request_more_cards() == DealOutcome::Nothing {
                    break;
                }
            }
        }
        game.clear_pending_removal();

        assert!(game.deck_cursor() >= last_cursor);
        assert!(game.deck_cursor() <= DECK_SIZE);
        last_cursor = game.deck_cursor();

        let matches = game.matches_found();
        assert_eq!(game.score(), 3 * matches as i32);
        assert_eq!(game.matched_cards().len(), 3 * matches as usize);

        let on_table: HashSet<_> = game.playing_cards().iter().map(Card::id).collect();
        assert_eq!(on_table.len(), game.playing_cards().len());
    }

    assert!(game.deck_exhausted());
    assert!(game.hint().is_none());
    assert!(game.matches_found() <= MATCHES_PER_GAME);
    assert_eq!(game.is_complete(), game.matches_found() == MATCHES_PER_GAME);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_initial_cards(15)
        .with_match_reward(4)
        .with_mismatch_penalty(0);

    assert_eq!(options.initial_cards, 15);
    assert_eq!(options.match_reward, 4);
    assert_eq!(options.mismatch_penalty, 0);
    assert_eq!(GameOptions::default().initial_cards, 12);
}

#[test]
fn shared_game_serializes_callers() {
    let shared = Arc::new(SharedGame::new(new_game(19)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.with(Game::request_more_cards))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), DealOutcome::Dealt(3));
    }

    let game = Arc::try_unwrap(shared).ok().unwrap().into_inner();
    assert_eq!(game.slots().len(), 24);
    assert_eq!(game.deck_cursor(), 24);
}
