//! Read-only selectors for front ends.

use crate::{legal_plays, Card, CardType, GameSnapshot, LogEntry, Phase};

pub const GAME_OVER_TEXT: &str = "No more plays. Game over.";

pub fn valid_plays(state: &GameSnapshot) -> &'static [CardType] {
    legal_plays(state.phase)
}

pub fn is_game_over(state: &GameSnapshot) -> bool {
    match state.phase {
        Phase::EndGame => true,
        Phase::PlayForTurn => !state.has_legal_play(),
        Phase::PlayingLocation | Phase::Resolve => false,
    }
}

pub fn playable_cards(state: &GameSnapshot) -> Vec<&Card> {
    let legal = valid_plays(state);
    state
        .hand
        .iter()
        .filter(|card| legal.contains(&card.kind))
        .collect()
}

pub fn instruction(state: &GameSnapshot) -> String {
    match state.phase {
        Phase::PlayForTurn if is_game_over(state) => GAME_OVER_TEXT.to_string(),
        Phase::PlayForTurn => "Do something. (Select a Location or Event)".to_string(),
        Phase::PlayingLocation => {
            let visiting = state
                .playing_card
                .as_ref()
                .map(|card| card.name.as_str())
                .unwrap_or("somewhere");
            format!(
                "On your way to {visiting}, you stumble across... (Select an Artifact, Event, or Person)"
            )
        }
        Phase::Resolve => String::new(),
        Phase::EndGame => GAME_OVER_TEXT.to_string(),
    }
}

pub fn location_heading(state: &GameSnapshot) -> String {
    match &state.current_location {
        Some(location) => format!("At: {}", location.name),
        None => "Lost in the wilderness".to_string(),
    }
}

/// Playing nothing at a location is allowed.
pub fn can_skip(state: &GameSnapshot) -> bool {
    state.phase == Phase::PlayingLocation
}

pub fn resolution_message(state: &GameSnapshot) -> Option<&str> {
    state.resolution.as_ref().map(|resolution| resolution.message.as_str())
}

pub fn log_newest_first(state: &GameSnapshot) -> impl Iterator<Item = &LogEntry> + '_ {
    state.game_log.iter().rev()
}
