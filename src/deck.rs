use std::fmt;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "♥",
                Suit::Diamonds => "♦",
                Suit::Clubs => "♣",
                Suit::Spades => "♠",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Face value before any Ace softening: an Ace counts 11 here.
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// A single 52-card deck, shuffled once at construction and never refilled.
/// Cards come off the back, so shuffle order decides the deal order.
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        log::debug!("shuffled a fresh deck (seed {seed})");
        Deck { cards }
    }

    /// Deck with a fixed deal order: the first card in `order` is dealt
    /// first. Lets tests script exact hands instead of mocking the shuffle.
    pub fn stacked(order: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = order.into_iter().collect();
        cards.reverse();
        Deck { cards }
    }

    /// Remove and return the top card, or `None` once the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove up to `n` cards in deal order. Short deals return whatever is
    /// left; an empty deck yields an empty vec.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n.min(self.cards.len()));
        for _ in 0..n {
            match self.deal() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_holds_every_card_once() {
        let mut deck = Deck::new(0);
        let cards = deck.draw(52);
        assert_eq!(cards.len(), 52);
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(distinct.len(), 52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(distinct.contains(&Card::new(suit, rank)));
            }
        }
    }

    #[test]
    fn draw_removes_exactly_what_it_returns() {
        let mut deck = Deck::new(42);
        let drawn = deck.draw(5);
        assert_eq!(drawn.len(), 5);
        assert_eq!(deck.remaining(), 47);
        let rest = deck.draw(52);
        assert_eq!(rest.len(), 47);
        for card in &drawn {
            assert!(!rest.contains(card));
        }
    }

    #[test]
    fn short_deck_deals_only_what_is_left() {
        let mut deck = Deck::stacked([
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Diamonds, Rank::Nine),
        ]);
        assert_eq!(deck.draw(5).len(), 3);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.draw(1).is_empty());
        assert!(deck.deal().is_none());
    }

    #[test]
    fn same_seed_deals_in_the_same_order() {
        let mut a = Deck::new(7);
        let mut b = Deck::new(7);
        assert_eq!(a.draw(52), b.draw(52));
    }

    #[test]
    fn stacked_deck_deals_in_the_order_given() {
        let first = Card::new(Suit::Clubs, Rank::Two);
        let second = Card::new(Suit::Spades, Rank::Queen);
        let mut deck = Deck::stacked([first, second]);
        assert_eq!(deck.deal(), Some(first));
        assert_eq!(deck.deal(), Some(second));
    }

    #[test]
    fn cards_render_rank_then_suit() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    }
}
