use std::fmt;

use super::Player;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    /// Every column filled with no complete line.
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "Player {player} won!"),
            GameOutcome::Draw => f.write_str("Draw! No moves remain."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            GameOutcome::Winner(Player::One).to_string(),
            "Player 1 won!"
        );
        assert_eq!(
            GameOutcome::Winner(Player::Two).to_string(),
            "Player 2 won!"
        );
        assert_eq!(GameOutcome::Draw.to_string(), "Draw! No moves remain.");
    }
}
