//! Money parsing, formatting and player balance tests.

use twentyone::{AmountError, BetError, Currency, Player, PlayerError, PlayerHand};

#[test]
fn formats_with_symbol_and_precision() {
    let pounds = Currency::default();
    assert_eq!(pounds.format(0), "£0.00");
    assert_eq!(pounds.format(7), "£0.07");
    assert_eq!(pounds.format(50_000), "£500.00");

    let yen = Currency::new("¥", 0);
    assert_eq!(yen.format(1_500), "¥1500");

    let mills = Currency::new("$", 3);
    assert_eq!(mills.format(12_345), "$12.345");
}

#[test]
fn parses_user_amounts() {
    let pounds = Currency::default();
    assert_eq!(pounds.parse("25"), Ok(2_500));
    assert_eq!(pounds.parse(" 25.50 "), Ok(2_550));
    assert_eq!(pounds.parse("£0.01"), Ok(1));
    assert_eq!(pounds.parse("10."), Ok(1_000));
    assert_eq!(pounds.parse(".5"), Ok(50));
    assert_eq!(pounds.parse("0"), Ok(0));

    assert_eq!(Currency::new("$", 0).parse("10"), Ok(10));
}

#[test]
fn rejects_malformed_amounts() {
    let pounds = Currency::default();
    assert_eq!(pounds.parse(""), Err(AmountError::Empty));
    assert_eq!(pounds.parse("£"), Err(AmountError::Empty));
    assert_eq!(pounds.parse("."), Err(AmountError::NotANumber));
    assert_eq!(pounds.parse("ten"), Err(AmountError::NotANumber));
    assert_eq!(pounds.parse("-5"), Err(AmountError::NotANumber));
    assert_eq!(pounds.parse("1.2.3"), Err(AmountError::NotANumber));
    assert_eq!(
        pounds.parse("1.234"),
        Err(AmountError::TooPrecise { precision: 2 })
    );
    assert_eq!(
        Currency::new("$", 0).parse("10.5"),
        Err(AmountError::TooPrecise { precision: 0 })
    );
    assert_eq!(
        pounds.parse("99999999999999999999999"),
        Err(AmountError::Overflow)
    );
}

#[test]
fn player_names_are_one_to_twelve_characters() {
    assert!(Player::new("A", 0, 12).is_ok());
    assert!(Player::new("Twelve Chars", 0, 12).is_ok());
    assert!(Player::new("Zoë", 0, 12).is_ok());
    assert_eq!(
        Player::new("", 0, 12).unwrap_err(),
        PlayerError::InvalidName { max: 12 }
    );
    assert_eq!(
        Player::new("Thirteen Char", 0, 12).unwrap_err(),
        PlayerError::InvalidName { max: 12 }
    );
}

#[test]
fn bets_come_out_of_the_balance() {
    let mut player = Player::new("Ada", 1_000, 12).unwrap();
    let mut hand = PlayerHand::new();

    assert_eq!(player.place_bet(&mut hand, 0), Err(BetError::ZeroBet));
    assert_eq!(
        player.place_bet(&mut hand, 1_001),
        Err(BetError::InsufficientFunds)
    );
    assert_eq!(player.balance(), 1_000);
    assert_eq!(hand.wager(), 0);

    player.place_bet(&mut hand, 1_000).unwrap();
    assert_eq!(player.balance(), 0);
    assert_eq!(hand.wager(), 1_000);
}

#[test]
fn precision_beyond_usize_range_does_not_panic() {
    let tiny = Currency::new("$", 20);
    assert_eq!(tiny.scale(), None);
    assert_eq!(tiny.format(1), "$0.00000000000000000001");
    assert_eq!(tiny.format(0), "$0.00000000000000000000");
    assert_eq!(tiny.parse("1"), Err(AmountError::Overflow));
    assert_eq!(tiny.parse("0.00000000000000000001"), Ok(1));
    assert_eq!(tiny.parse("0"), Ok(0));

    assert_eq!(Currency::new("$", u8::MAX).parse("5"), Err(AmountError::Overflow));
    assert_eq!(Currency::default().scale(), Some(100));
}
