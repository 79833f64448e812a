//! Card, deck, hand, and round integration tests.

use std::collections::HashSet;

use drawrs::{
    ACE, AddError, Card, DECK_SIZE, DealError, Deck, DiscardError, DrawError, EvalError,
    ExchangeError, Hand, Outcome, ParseCardError, Round, RoundOptions, RoundState, ShowdownError,
    Suit, split_positions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(round: &Round, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    *round.deck.lock() = Deck::from_cards(deck);
}

const C1: Card = card(Suit::Spades, 2);
const C2: Card = card(Suit::Spades, 3);
const C3: Card = card(Suit::Spades, 4);
const C4: Card = card(Suit::Spades, 5);
const C5: Card = card(Suit::Spades, 6);

fn low_straight_flush() -> Hand {
    Hand::from([C1, C2, C3, C4, C5])
}

#[test]
fn card_notation() {
    assert_eq!("As".parse::<Card>(), Ok(card(Suit::Spades, ACE)));
    assert_eq!("10h".parse::<Card>(), Ok(card(Suit::Hearts, 10)));
    assert_eq!("Td".parse::<Card>(), Ok(card(Suit::Diamonds, 10)));
    assert_eq!("qC".parse::<Card>(), Ok(card(Suit::Clubs, 12)));
    assert_eq!("1s".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("11s".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::InvalidSuit));
    assert_eq!("s".parse::<Card>(), Err(ParseCardError::InvalidLength));
    assert_eq!("".parse::<Card>(), Err(ParseCardError::InvalidLength));

    assert_eq!(card(Suit::Spades, ACE).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Clubs, 11).to_string(), "J♣");
}

#[test]
fn standard_deck_holds_each_card_once() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 2..=ACE {
            assert!(unique.contains(&card(suit, rank)), "missing {rank} of {suit:?}");
        }
    }
}

#[test]
fn seeded_decks_are_shuffled_and_repeatable() {
    let deck = Deck::with_seed(42);
    assert_eq!(deck, Deck::with_seed(42));
    assert_ne!(deck, Deck::standard());

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn drawing_empties_the_deck() {
    let mut deck = Deck::with_seed(3);
    let mut drawn = HashSet::new();

    for _ in 0..DECK_SIZE {
        assert!(drawn.insert(deck.draw().unwrap()));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::from_cards(vec![C1, C2, C3]);
    assert_eq!(deck.draw(), Ok(C3));
    assert_eq!(deck.draw_many(2), Ok(vec![C2, C1]));

    let mut deck = Deck::from_cards(vec![C1, C2]);
    assert_eq!(deck.draw_many(3), Err(DrawError::EmptyDeck));
    assert_eq!(deck.len(), 2);
}

#[test]
fn hand_holds_at_most_five_cards() {
    assert_eq!(
        Hand::new(vec![C1, C2, C3, C4, C5, C1]).unwrap_err(),
        AddError::HandOverflow
    );

    let hand = low_straight_flush();
    assert_eq!(hand.len(), 5);
    assert!(hand.is_full());
}

#[test]
fn discard_rejects_bad_requests() {
    let mut hand = low_straight_flush();

    assert_eq!(
        hand.discard(&[1, 2, 3, 4]).unwrap_err(),
        DiscardError::TooManyDiscards
    );
    assert_eq!(
        hand.discard(&[5, 6]).unwrap_err(),
        DiscardError::InvalidPosition(6)
    );
    assert_eq!(
        hand.discard(&[0]).unwrap_err(),
        DiscardError::InvalidPosition(0)
    );
    assert_eq!(hand, low_straight_flush());
}

#[test]
fn discard_positions_follow_the_current_hand() {
    let mut hand = low_straight_flush();
    hand.discard(&[1, 2]).unwrap();
    assert_eq!(hand.cards(), &[C3, C4, C5]);

    assert_eq!(
        hand.discard(&[4]).unwrap_err(),
        DiscardError::InvalidPosition(4)
    );
    assert_eq!(hand.cards(), &[C3, C4, C5]);

    assert_eq!(hand.discard(&[3]).unwrap(), vec![C5]);
    assert_eq!(hand.cards(), &[C3, C4]);
}

#[test]
fn discard_removes_the_requested_cards() {
    let mut hand = low_straight_flush();

    let removed = hand.discard(&[3, 1]).unwrap();
    assert_eq!(removed, vec![C1, C3]);
    assert_eq!(hand.cards(), &[C2, C4, C5]);

    let mut hand = low_straight_flush();
    assert_eq!(hand.discard(&[2, 2]).unwrap(), vec![C2]);
    assert_eq!(hand.len(), 4);
}

#[test]
fn split_positions_leaves_the_snapshot_alone() {
    let cards = [C1, C2, C3, C4, C5];
    let (kept, removed) = split_positions(&cards, &[5, 4, 1], 3).unwrap();

    assert_eq!(kept, vec![C2, C3]);
    assert_eq!(removed, vec![C1, C4, C5]);
    assert_eq!(cards, [C1, C2, C3, C4, C5]);

    let short = [C1, C2, C3];
    assert_eq!(
        split_positions(&short, &[4], 3).unwrap_err(),
        DiscardError::InvalidPosition(4)
    );
    let (kept, removed) = split_positions(&short, &[3, 1], 3).unwrap();
    assert_eq!(kept, vec![C2]);
    assert_eq!(removed, vec![C1, C3]);
}

#[test]
fn add_cards_rejects_bad_requests() {
    let mut hand = low_straight_flush();

    assert_eq!(
        hand.add_cards(&[C1, C2, C3, C4]).unwrap_err(),
        AddError::TooManyAdded
    );
    assert_eq!(
        hand.add_cards(&[C1, C3, C4]).unwrap_err(),
        AddError::HandOverflow
    );
    assert_eq!(hand, low_straight_flush());
}

#[test]
fn discard_then_add_restores_the_hand() {
    let mut hand = low_straight_flush();
    hand.discard(&[1, 2]).unwrap();
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.classify(), Err(EvalError::InvalidHandSize(3)));

    let replacements = [card(Suit::Hearts, 13), card(Suit::Hearts, 14)];
    hand.add_cards(&replacements).unwrap();

    assert_eq!(hand.len(), 5);
    assert_eq!(hand.cards(), &[C3, C4, C5, replacements[0], replacements[1]]);
}

#[test]
fn exchange_limit_is_configurable() {
    let mut hand = low_straight_flush().with_max_exchange(4);
    assert_eq!(hand.discard(&[1, 2, 3, 4]).unwrap().len(), 4);
    hand.add_cards(&[C1, C2, C3, C4]).unwrap();
    assert!(hand.is_full());

    assert_eq!(Hand::empty().with_max_exchange(9).max_exchange(), 5);
}

#[test]
fn deal_exchange_and_showdown() {
    let round = Round::new(RoundOptions::default(), 1);
    let r1 = card(Suit::Hearts, 2);
    let r2 = card(Suit::Hearts, 4);
    let r3 = card(Suit::Hearts, 9);
    set_deck_from_draws(&round, &[C1, C2, C3, C4, C5, r1, r2, r3]);

    let hand = round.deal().unwrap();
    assert_eq!(hand.cards(), &[C1, C2, C3, C4, C5]);
    assert_eq!(round.state(), RoundState::Drawing);
    assert_eq!(round.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(
        round.showdown(&low_straight_flush()).unwrap_err(),
        ShowdownError::InvalidState
    );

    let drawn = round.exchange(&[1, 3]).unwrap();
    assert_eq!(drawn, vec![r1, r2]);
    assert_eq!(round.hand().cards(), &[C2, C4, C5, r1, r2]);
    assert_eq!(round.discards(), vec![C1, C3]);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.state(), RoundState::Showdown);
    assert_eq!(round.exchange(&[1]).unwrap_err(), ExchangeError::InvalidState);

    // 3 5 6 of spades plus 2 4 of hearts is a six-high straight.
    assert_eq!(round.classify(), Ok(drawrs::Category::Straight));
    assert_eq!(round.showdown(&low_straight_flush()), Ok(Outcome::Lost));
}

#[test]
fn rejected_exchange_leaves_round_untouched() {
    let round = Round::new(RoundOptions::default(), 2);
    set_deck_from_draws(&round, &[C1, C2, C3, C4, C5, card(Suit::Hearts, 7)]);
    round.deal().unwrap();

    assert_eq!(
        round.exchange(&[1, 2, 3, 4]).unwrap_err(),
        ExchangeError::Discard(DiscardError::TooManyDiscards)
    );
    assert_eq!(
        round.exchange(&[1, 2]).unwrap_err(),
        ExchangeError::Draw(DrawError::EmptyDeck)
    );

    assert_eq!(round.state(), RoundState::Drawing);
    assert_eq!(round.hand(), low_straight_flush());
    assert_eq!(round.cards_remaining(), 1);
    assert!(round.discards().is_empty());
}

#[test]
fn empty_exchange_stands_pat() {
    let round = Round::new(RoundOptions::default(), 7);
    set_deck_from_draws(&round, &[C1, C2, C3, C4, C5, card(Suit::Hearts, 9)]);
    round.deal().unwrap();

    assert_eq!(round.exchange(&[]), Ok(vec![]));
    assert_eq!(round.hand(), low_straight_flush());
    assert!(round.discards().is_empty());
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.state(), RoundState::Showdown);
}

#[test]
fn stand_keeps_the_dealt_hand() {
    let round = Round::new(RoundOptions::default(), 3);
    assert_eq!(round.stand().unwrap_err(), ExchangeError::InvalidState);
    assert_eq!(round.classify(), Err(EvalError::InvalidHandSize(0)));

    set_deck_from_draws(&round, &[C1, C2, C3, C4, C5]);
    round.deal().unwrap();
    round.stand().unwrap();

    assert_eq!(round.state(), RoundState::Showdown);
    assert_eq!(round.showdown(&low_straight_flush()), Ok(Outcome::Draw));

    let short = Hand::new(vec![C1, C2, C3, C4]).unwrap();
    assert_eq!(
        round.showdown(&short).unwrap_err(),
        ShowdownError::Eval(EvalError::InvalidHandSize(4))
    );
}

#[test]
fn round_options_reach_the_hand() {
    let options = RoundOptions::default().with_max_exchange(4);
    let round = Round::new(options, 4);

    let hand = round.deal().unwrap();
    assert_eq!(hand.max_exchange(), 4);
    assert_eq!(round.exchange(&[1, 2, 3, 4]).unwrap().len(), 4);
    assert!(round.hand().is_full());
    assert_eq!(round.cards_remaining(), DECK_SIZE - 9);
}

#[test]
fn clear_round_reshuffles_by_default() {
    let round = Round::new(RoundOptions::default(), 5);
    round.deal().unwrap();
    round.exchange(&[1]).unwrap();

    round.clear_round();

    assert_eq!(round.state(), RoundState::WaitingForDeal);
    assert!(round.hand().is_empty());
    assert!(round.discards().is_empty());
    assert_eq!(round.cards_remaining(), DECK_SIZE);
}

#[test]
fn deck_runs_out_without_reshuffle() {
    let options = RoundOptions::default().with_reshuffle_each_round(false);
    let round = Round::new(options, 6);

    for dealt in 1..=DECK_SIZE / 5 {
        round.deal().unwrap();
        round.stand().unwrap();
        round.clear_round();
        assert_eq!(round.cards_remaining(), DECK_SIZE - dealt * 5);
    }

    assert_eq!(round.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(round.state(), RoundState::WaitingForDeal);
    assert_eq!(round.cards_remaining(), 2);
}
