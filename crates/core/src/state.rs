use crate::{Card, CardType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    PlayForTurn,
    PlayingLocation,
    Resolve,
    EndGame,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::PlayForTurn => "PlayForTurn",
            Phase::PlayingLocation => "PlayingLocation",
            Phase::Resolve => "Resolve",
            Phase::EndGame => "EndGame",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card types that may be played in `phase`. Empty when no play is allowed.
pub fn legal_plays(phase: Phase) -> &'static [CardType] {
    match phase {
        Phase::PlayForTurn => &[CardType::Location, CardType::Event],
        Phase::PlayingLocation => &[CardType::Event, CardType::Artifact, CardType::Person],
        Phase::Resolve | Phase::EndGame => &[],
    }
}

pub fn can_play_cards(phase: Phase) -> bool {
    matches!(phase, Phase::PlayForTurn | Phase::PlayingLocation)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Zone {
    Deck,
    Hand,
    Played,
    Discard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Played, Zone::Discard];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub posted_at: u64,
}

/// One immutable view of a game. Transitions build a new snapshot and never
/// touch the one they were given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub hand: Vec<Card>,
    pub deck: Vec<Card>,
    pub played: Vec<Card>,
    pub discard: Vec<Card>,
    pub game_log: Vec<LogEntry>,
    #[serde(default)]
    pub current_location: Option<Card>,
    pub phase: Phase,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    #[serde(default)]
    pub playing_card: Option<Card>,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zone(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Played => &self.played,
            Zone::Discard => &self.discard,
        }
    }

    pub fn zones(&self) -> impl Iterator<Item = (Zone, &[Card])> + '_ {
        Zone::ALL.into_iter().map(move |zone| (zone, self.zone(zone)))
    }

    /// Cards across all four zones; 52 for any dealt game.
    pub fn card_count(&self) -> usize {
        self.zones().map(|(_, cards)| cards.len()).sum()
    }

    pub fn in_hand(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    pub fn has_legal_play(&self) -> bool {
        let legal = legal_plays(self.phase);
        self.hand.iter().any(|card| legal.contains(&card.kind))
    }
}
