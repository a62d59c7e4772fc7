//! Game state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds.
    WaitingForBet,
    /// Accepting the player's bet.
    Betting,
    /// Bet placed, waiting for the deal.
    Dealing,
    /// Initial cards dealt; naturals must be checked.
    Naturals,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands have stopped and the bet can be settled.
    RoundOver,
    /// Payout made; clear the round to start another.
    Settled,
}
