use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardType {
    Location,
    Event,
    Artifact,
    Person,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Location,
        CardType::Event,
        CardType::Artifact,
        CardType::Person,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CardType::Location => "Location",
            CardType::Event => "Event",
            CardType::Artifact => "Artifact",
            CardType::Person => "Person",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single card. Cards are never modified once dealt; zones only move them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: CardType,
    pub number: u8,
    pub name: String,
    #[serde(default = "dealt_face_down")]
    pub face_down: bool,
    #[serde(default)]
    pub upside_down: bool,
}

fn dealt_face_down() -> bool {
    true
}

impl Card {
    pub fn new(kind: CardType, number: u8) -> Self {
        Self {
            kind,
            number,
            name: format!("{number} of {kind}"),
            face_down: true,
            upside_down: false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
