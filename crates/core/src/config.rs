use crate::DEFAULT_HAND_CAPACITY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_hand_capacity")]
    pub hand_capacity: usize,
    /// Enter `EndGame` instead of `PlayForTurn` when the hand holds no legal play.
    #[serde(default = "default_end_on_no_plays")]
    pub end_on_no_plays: bool,
}

fn default_hand_capacity() -> usize {
    DEFAULT_HAND_CAPACITY
}

fn default_end_on_no_plays() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_capacity: default_hand_capacity(),
            end_on_no_plays: default_end_on_no_plays(),
        }
    }
}
