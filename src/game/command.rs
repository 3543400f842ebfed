//! Player Command Parsing
//!
//! One line of console input becomes one [`Command`]. Parsing never fails;
//! anything unrecognised becomes [`Command::Invalid`].

/// A command entered at the move prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`: leave the game.
    Exit,
    /// `?`: show the win/lose/draw table.
    Help,
    /// `1..=N`: play the move at this 0-based index.
    Play(usize),
    /// Anything else, kept for the diagnostic.
    Invalid(String),
}

impl Command {
    /// Parse a line against a move set of size `move_count`.
    pub fn parse(line: &str, move_count: usize) -> Self {
        let input = line.trim();

        match input {
            "0" => Self::Exit,
            "?" => Self::Help,
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=move_count).contains(&n) => Self::Play(n - 1),
                _ => Self::Invalid(input.to_string()),
            },
        }
    }
}
