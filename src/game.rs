use std::io;
use std::time::Duration;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::ui::{Tone, Ui};

/// How a round ended. Blackjack variants can only come out of the initial
/// two-card deal; everything else is settled after the turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBlackjack,
    DealerBlackjack,
    BlackjackPush,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

/// One round of blackjack: owns the deck for its lifetime and talks to the
/// player through the `Ui` collaborator.
pub struct BlackjackGame<'a, U: Ui> {
    pub deck: Deck,
    ui: &'a mut U,
}

impl<'a, U: Ui> BlackjackGame<'a, U> {
    pub fn new(deck: Deck, ui: &'a mut U) -> Self {
        BlackjackGame { deck, ui }
    }

    /// Deal, pre-check naturals, run both turns, settle. The only error
    /// surface is stdin going away mid-prompt.
    pub fn play_round(&mut self) -> io::Result<Outcome> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.extend(self.deck.draw(2));
        dealer.extend(self.deck.draw(2));
        log::debug!("dealt player [{player}] dealer [{dealer}]");

        self.ui.show(
            Tone::Warn,
            &format!("Dealer's visible card: {}", dealer.cards()[0]),
        );
        self.ui.show(Tone::Info, &format!("Your hand: {player}"));
        self.ui
            .show(Tone::Info, &format!("Your total value: {}", player.value()));
        self.ui.pause(Duration::from_secs(1));

        // Naturals only count straight off the deal; a 21 reached later in
        // the round settles as a plain win.
        match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, true) => {
                self.ui
                    .show(Tone::Info, "\nBoth player and dealer have blackjack! It's a tie!");
                return Ok(Outcome::BlackjackPush);
            }
            (true, false) => {
                self.ui
                    .show(Tone::Success, "\nPlayer has blackjack! Player wins!");
                return Ok(Outcome::PlayerBlackjack);
            }
            (false, true) => {
                self.ui
                    .show(Tone::Error, "\nDealer has blackjack! Dealer wins!");
                return Ok(Outcome::DealerBlackjack);
            }
            (false, false) => {}
        }

        let player_bust = self.player_turn(&mut player)?;
        let dealer_bust = if player_bust {
            // Dealer never plays against a busted player.
            false
        } else {
            self.ui.show(Tone::Warn, "\nDealer's turn...");
            self.ui.pause(Duration::from_secs(1));
            self.dealer_turn(&mut dealer)
        };

        let outcome = determine_winner(&player, &dealer, player_bust, dealer_bust);
        log::debug!(
            "player {} ({}) vs dealer {} ({}) -> {outcome:?}",
            player,
            player.value(),
            dealer,
            dealer.value()
        );
        self.show_result(&player, &dealer, outcome);
        Ok(outcome)
    }

    /// Interactive hit/stand loop. Returns the bust flag; the hand keeps
    /// whatever it drew.
    pub fn player_turn(&mut self, hand: &mut Hand) -> io::Result<bool> {
        loop {
            let total = hand.value();
            self.ui.show(
                Tone::Info,
                &format!("\nYour hand: {hand} | Total value: {total}"),
            );

            if total > 21 {
                self.ui.show(Tone::Error, "Bust! You exceeded 21.");
                return Ok(true);
            }

            let choice = self.ui.ask("Do you want to 'hit' or 'stand' (h/s)?")?;
            match choice.to_lowercase().as_str() {
                "h" | "hit" => {
                    if let Some(card) = self.deck.deal() {
                        self.ui.show(Tone::Success, &format!("You drew: {card}"));
                        hand.push(card);
                    }
                    self.ui.pause(Duration::from_millis(800));
                }
                "s" | "stand" => {
                    self.ui.show(Tone::Info, "You stand.\n");
                    self.ui.pause(Duration::from_secs(1));
                    return Ok(false);
                }
                _ => self
                    .ui
                    .show(Tone::Error, "Invalid choice. Please enter 'h' or 's'."),
            }
        }
    }

    /// Fixed house policy: hit on 16 or less, stand on 17 through 21.
    /// Returns the bust flag.
    pub fn dealer_turn(&mut self, hand: &mut Hand) -> bool {
        loop {
            let total = hand.value();
            self.ui.show(
                Tone::Warn,
                &format!("Dealer's hand: {hand} | Total value: {total}"),
            );
            self.ui.pause(Duration::from_secs(1));

            if total <= 16 {
                self.ui.show(Tone::Warn, "Dealer hits...");
                match self.deck.deal() {
                    Some(card) => hand.push(card),
                    // Out of cards: nothing left to hit with, stand pat.
                    None => return false,
                }
                self.ui.pause(Duration::from_secs(1));
            } else if total > 21 {
                self.ui.show(Tone::Error, "Dealer busts!");
                return true;
            } else {
                self.ui.show(Tone::Info, "Dealer stands.");
                return false;
            }
        }
    }

    fn show_result(&mut self, player: &Hand, dealer: &Hand, outcome: Outcome) {
        self.ui.show(Tone::Info, "\n------------------------------");
        self.ui.show(
            Tone::Info,
            &format!(
                "Player total: {} | Dealer total: {}",
                player.value(),
                dealer.value()
            ),
        );
        self.ui.show(Tone::Info, "------------------------------");
        self.ui.pause(Duration::from_secs(1));

        match outcome {
            Outcome::PlayerBust => self.ui.show(Tone::Error, "Dealer wins - player busted."),
            Outcome::DealerBust => self.ui.show(Tone::Success, "Player wins - dealer busted!"),
            Outcome::PlayerWins => self.ui.show(Tone::Success, "Player wins!"),
            Outcome::DealerWins => self.ui.show(Tone::Error, "Dealer wins."),
            Outcome::Push => self.ui.show(Tone::Info, "It's a tie!"),
            // Naturals are announced at the deal and never reach here.
            Outcome::PlayerBlackjack | Outcome::DealerBlackjack | Outcome::BlackjackPush => {}
        }
    }
}

/// Settle a finished round. Precedence: a busted player loses outright, then
/// a busted dealer, then the higher total, then a push on equal totals.
pub fn determine_winner(
    player: &Hand,
    dealer: &Hand,
    player_bust: bool,
    dealer_bust: bool,
) -> Outcome {
    if player_bust {
        Outcome::PlayerBust
    } else if dealer_bust {
        Outcome::DealerBust
    } else if player.value() > dealer.value() {
        Outcome::PlayerWins
    } else if dealer.value() > player.value() {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}
