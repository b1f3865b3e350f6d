use crate::Card;
use serde::{Deserialize, Serialize};

/// Everything a front end can ask of the turn machine.
///
/// Tags that this build does not know deserialize to `Unknown`, which the
/// machine ignores, so old and new front ends can share the action format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NewGame,
    PlayCard {
        #[serde(default)]
        card: Option<Card>,
    },
    Continue,
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn new_game() -> Self {
        Action::NewGame
    }

    pub fn play_card(card: Option<Card>) -> Self {
        Action::PlayCard { card }
    }

    pub fn continue_turn() -> Self {
        Action::Continue
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::NewGame => "NEW_GAME",
            Action::PlayCard { .. } => "PLAY_CARD",
            Action::Continue => "CONTINUE",
            Action::Unknown => "UNKNOWN",
        }
    }
}
