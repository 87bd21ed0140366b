//! Round integration tests.

use drawpoker::{
    Card, DECK_SIZE, Deck, DeckError, HandCategory, HandError, Round, RoundError, RoundOptions,
    RoundState,
};

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn stacked(draws: &str) -> Deck {
    Deck::from_cards(draws.split_whitespace().map(card))
}

#[test]
fn deal_fills_the_hand_in_draw_order() {
    let deck = stacked("AS AD 3S 4S 5S 9C 10C JD");
    let mut round = Round::with_deck(RoundOptions::default(), deck);
    assert_eq!(round.state(), RoundState::Dealing);
    assert_eq!(round.category(), None);

    let category = round.deal().unwrap();
    assert_eq!(category, HandCategory::OnePair);
    assert_eq!(round.category(), Some(HandCategory::OnePair));
    assert_eq!(
        round.hand().cards(),
        &[card("AS"), card("AD"), card("3S"), card("4S"), card("5S")]
    );
    assert_eq!(round.cards_remaining(), 3);
    assert_eq!(round.state(), RoundState::Exchanging);
    assert_eq!(round.exchanges_remaining(), 2);
}

#[test]
fn exchange_replaces_discards_with_next_cards() {
    let deck = stacked("AS AD 3S 4S 5S 3C AC KH");
    let mut round = Round::with_deck(RoundOptions::default(), deck);
    round.deal().unwrap();

    let result = round.exchange(&[3, 4]).unwrap();
    assert_eq!(result.discarded, vec![card("4S"), card("5S")]);
    assert_eq!(result.drawn, vec![card("3C"), card("AC")]);
    assert_eq!(result.category, HandCategory::FullHouse);
    assert_eq!(
        round.hand().cards(),
        &[card("AS"), card("AD"), card("3S"), card("3C"), card("AC")]
    );
    assert_eq!(round.exchanges_remaining(), 1);
    assert_eq!(round.state(), RoundState::Exchanging);
}

#[test]
fn round_finishes_after_configured_exchanges() {
    let mut round = Round::new(RoundOptions::default(), 7);
    round.deal().unwrap();
    round.exchange(&[0]).unwrap();
    let last = round.exchange(&[]).unwrap();

    assert!(last.discarded.is_empty());
    assert!(last.drawn.is_empty());
    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.exchanges_remaining(), 0);
    assert_eq!(round.category(), Some(last.category));
    assert_eq!(round.cards_remaining(), DECK_SIZE - 6);

    assert_eq!(round.exchange(&[0]).unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.deal().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn zero_exchanges_finishes_on_deal() {
    let options = RoundOptions::default().with_exchanges(0);
    let mut round = Round::new(options, 3);
    round.deal().unwrap();

    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.exchange(&[]).unwrap_err(), RoundError::InvalidState);
}

#[test]
fn exchange_before_deal_is_rejected() {
    let mut round = Round::new(RoundOptions::default(), 1);
    assert_eq!(round.exchange(&[0]).unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.cards_remaining(), DECK_SIZE);
}

#[test]
fn invalid_index_leaves_round_untouched() {
    let mut round = Round::new(RoundOptions::default(), 11);
    round.deal().unwrap();
    let before = round.hand().clone();

    assert_eq!(
        round.exchange(&[1, 5]).unwrap_err(),
        RoundError::Hand(HandError::InvalidIndex { index: 5, len: 5 })
    );
    assert_eq!(round.hand(), &before);
    assert_eq!(round.exchanges_remaining(), 2);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 5);
}

#[test]
fn discard_limit_counts_distinct_positions() {
    let options = RoundOptions::default().with_max_discard(2);
    let mut round = Round::new(options, 5);
    round.deal().unwrap();

    assert_eq!(
        round.exchange(&[0, 1, 2]).unwrap_err(),
        RoundError::TooManyDiscards {
            requested: 3,
            max: 2
        }
    );
    assert_eq!(round.exchanges_remaining(), 2);

    let result = round.exchange(&[4, 4, 3]).unwrap();
    assert_eq!(result.discarded.len(), 2);
}

#[test]
fn running_out_of_cards_is_reported() {
    let mut round = Round::with_deck(RoundOptions::default(), stacked("AS AD 3S 4S"));
    assert_eq!(
        round.deal().unwrap_err(),
        RoundError::Deck(DeckError::Empty)
    );
    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.deal().unwrap_err(), RoundError::InvalidState);

    let mut round = Round::with_deck(RoundOptions::default(), stacked("AS AD 3S 4S 5S 6S"));
    round.deal().unwrap();
    assert_eq!(
        round.exchange(&[0, 1]).unwrap_err(),
        RoundError::Deck(DeckError::Empty)
    );
    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.hand().len(), 4);
    assert_eq!(round.exchanges_remaining(), 2);
    assert_eq!(round.exchange(&[]).unwrap_err(), RoundError::InvalidState);
}

#[test]
fn same_seed_deals_same_hand() {
    let mut a = Round::new(RoundOptions::default(), 42);
    let mut b = Round::new(RoundOptions::default(), 42);
    let mut c = Round::new(RoundOptions::default(), 43);

    assert_eq!(a.deal().unwrap(), b.deal().unwrap());
    c.deal().unwrap();
    assert_eq!(a.hand(), b.hand());
    assert_ne!(a.hand(), c.hand());
}
