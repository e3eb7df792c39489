//! CLI Set example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use setrs::{Card, Color, DealOutcome, Game, GameOptions, SelectOutcome, Shading, Slot};

/// Slots the table can show at once.
const DISPLAY_CAPACITY: usize = 24;

fn main() {
    println!("Set CLI example (slot number to select, 'd' deal, 'h' hint, 'n' new game, 'q' quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let Ok(mut game) = Game::new(options, seed) else {
        println!("Could not start a game.");
        return;
    };

    loop {
        print_table(&game);
        game.clear_pending_removal();

        if game.is_complete() {
            println!(
                "Congratulations! You found all {} sets. Final score: {}",
                game.matches_found(),
                game.score()
            );
            if !matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes") {
                break;
            }
            start_new_game(&mut game);
            continue;
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => break,
            "n" | "new" => start_new_game(&mut game),
            "h" | "hint" => match game.hint() {
                Some([a, b, c]) => println!("Try slots {a}, {b} and {c}."),
                None => println!("No set on the table."),
            },
            "d" | "deal" => deal(&mut game),
            other => match other.parse::<usize>() {
                Ok(index) => select(&mut game, index),
                Err(_) => println!("Unknown command."),
            },
        }
    }
}

fn start_new_game(game: &mut Game) {
    let initial = game.options().initial_cards;
    if let Err(err) = game.new_game(initial) {
        println!("New game error: {err}");
    }
}

// A full table only resolves a pending match; it never grows.
fn deal(game: &mut Game) {
    if game.slots().len() >= DISPLAY_CAPACITY
        && game.selected_cards().iter().all(|&card| !game.is_matched(card))
    {
        println!("The table is full.");
        return;
    }

    match game.request_more_cards() {
        DealOutcome::Dealt(count) => println!("Dealt {count} card(s)."),
        DealOutcome::Resolved(_) => println!("Replaced the matched cards."),
        DealOutcome::Nothing => println!("The deck is empty."),
    }
}

fn select(game: &mut Game, index: usize) {
    match game.select_card(index) {
        Ok(SelectOutcome::Matched) => println!("Set!"),
        Ok(SelectOutcome::Mismatched) => println!("Not a set."),
        Ok(_) => {}
        Err(err) => println!("{err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\nScore: {} | Sets: {} | Deck: {} cards remaining",
        game.score(),
        game.matches_found(),
        game.cards_remaining()
    );

    for (index, slot) in game.slots().iter().enumerate() {
        let text = match *slot {
            Slot::Occupied(card) => format_card(game, card),
            Slot::PendingRemoval(_) | Slot::Empty => continue,
        };
        println!("{index:>3}: {text}");
    }
    println!();
}

fn format_card(game: &Game, card: Card) -> String {
    let glyph = card.shape().glyph();
    let symbols: String = std::iter::repeat_n(glyph, usize::from(card.count())).collect();
    let symbols = colorize(&symbols, color_code(card.color(), card.shading()));

    let marker = if !game.is_selected(card) {
        " "
    } else if game.is_matched(card) {
        "+"
    } else if game.selected_cards().len() == 3 {
        "x"
    } else {
        "*"
    };

    format!("{marker} {symbols:<12} {card}")
}

fn color_code(color: Color, shading: Shading) -> &'static str {
    match (color, shading) {
        (Color::Blue, Shading::Filled) => "1;34",
        (Color::Blue, Shading::Striped) => "34",
        (Color::Blue, Shading::Outlined) => "2;34",
        (Color::Red, Shading::Filled) => "1;31",
        (Color::Red, Shading::Striped) => "31",
        (Color::Red, Shading::Outlined) => "2;31",
        (Color::Green, Shading::Filled) => "1;32",
        (Color::Green, Shading::Striped) => "32",
        (Color::Green, Shading::Outlined) => "2;32",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
