use std::io;
use std::time::Duration;

use crate::deck::Deck;
use crate::game::BlackjackGame;
use crate::ui::{Tone, Ui};

/// Run a whole sitting at the table: welcome screen, rounds until the
/// player declines to continue, farewell. Each round gets a fresh deck;
/// the per-round seed steps off `base_seed` so a whole session replays
/// from one number.
pub fn run<U: Ui>(ui: &mut U, base_seed: u64) -> io::Result<()> {
    welcome(ui)?;

    let mut seed = base_seed;
    loop {
        ui.show(Tone::Warn, "\nStarting a new round...");
        ui.pause(Duration::from_secs(1));

        let deck = Deck::new(seed);
        seed = seed.wrapping_add(1);
        let mut game = BlackjackGame::new(deck, ui);
        game.play_round()?;

        if !play_again(ui)? {
            break;
        }
    }

    farewell(ui);
    Ok(())
}

fn welcome<U: Ui>(ui: &mut U) -> io::Result<()> {
    ui.clear();
    ui.show(Tone::Info, "===================================");
    ui.show(Tone::Info, "        ♠♥ Welcome to ♣♦");
    ui.show(Tone::Warn, "            BLACKJACK");
    ui.show(Tone::Info, "===================================");
    ui.show(Tone::Info, "Rules:");
    ui.show(Tone::Info, " - Try to get as close to 21 as possible.");
    ui.show(Tone::Info, " - Face cards = 10, Aces = 1 or 11.");
    ui.show(Tone::Info, " - Type 'h' to hit or 's' to stand.");
    ui.show(Tone::Info, " - If you go over 21, you bust.");
    ui.show(Tone::Info, "===================================");
    // Any line (or none) opens the table.
    ui.ask("Press Enter to start the game...")?;
    ui.clear();
    Ok(())
}

fn play_again<U: Ui>(ui: &mut U) -> io::Result<bool> {
    loop {
        let answer = ui.ask("Do you want to play again? (y/n):")?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => {
                ui.clear();
                return Ok(true);
            }
            "n" | "no" => {
                ui.show(Tone::Info, "\nThanks for playing!");
                ui.pause(Duration::from_millis(1500));
                return Ok(false);
            }
            _ => ui.show(Tone::Error, "Invalid input. Please enter 'y' or 'n'."),
        }
    }
}

fn farewell<U: Ui>(ui: &mut U) {
    ui.clear();
    ui.show(Tone::Info, "===================================");
    ui.show(Tone::Info, "       Thanks for playing!");
    ui.show(Tone::Warn, "      Hope you had fun :)");
    ui.show(Tone::Info, "===================================");
    ui.pause(Duration::from_secs(2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Script;

    #[test]
    fn one_round_then_decline_ends_cleanly() {
        // Enter-gate, at most one hit/stand prompt (a natural skips it),
        // then play-again; stray "s" answers there just re-prompt.
        let mut ui = Script::new(&["", "s", "s", "n", "n"]);
        run(&mut ui, 11).unwrap();
        assert!(ui.saw("Welcome"));
        assert!(ui.saw("Starting a new round..."));
        assert!(ui.saw("Thanks for playing!"));
    }

    #[test]
    fn yes_deals_another_round() {
        let mut ui = Script::new(&["", "s", "s", "y", "s", "s", "n", "n"]);
        run(&mut ui, 3).unwrap();
        let rounds = ui
            .shown
            .iter()
            .filter(|line| line.contains("Starting a new round"))
            .count();
        assert_eq!(rounds, 2);
    }

    #[test]
    fn play_again_reprompts_until_it_understands() {
        let mut ui = Script::new(&["maybe", "y"]);
        assert!(play_again(&mut ui).unwrap());
        assert!(ui.saw("Invalid input"));

        let mut ui = Script::new(&["NO"]);
        assert!(!play_again(&mut ui).unwrap());
    }

    #[test]
    fn closed_stdin_surfaces_as_an_error() {
        let mut ui = Script::new(&[]);
        assert!(run(&mut ui, 0).is_err());
    }
}
