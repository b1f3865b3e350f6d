//! Narrative outcome of a completed play.
//!
//! Each resolver moves its card from hand to played, enters `Resolve`, sets the
//! resolution shown to the player and appends the new line to the game log.
//! Callers dispatch on card type; the resolvers trust that dispatch.

use crate::{Card, GameSnapshot, LogEntry, Phase, Resolution};

const EVENT_SEPARATOR: &str = "\n";
const FIND_SEPARATOR: &str = " ";

pub fn resolve_location(state: &GameSnapshot, location: &Card, now: u64) -> GameSnapshot {
    let message = format!("Welcome to {}.", location.name);
    let mut next = settle(state, location, message.clone(), now);
    next.current_location = Some(location.clone());
    next.resolution = Some(Resolution {
        message,
        success: true,
    });
    next
}

pub fn resolve_event(state: &GameSnapshot, event: &Card, now: u64) -> GameSnapshot {
    let message = format!("While {}, {} jumps out.", whereabouts(state), event.name);
    compose(state, event, message, EVENT_SEPARATOR, now)
}

pub fn resolve_artifact(state: &GameSnapshot, artifact: &Card, now: u64) -> GameSnapshot {
    let message = format!("While {}, you stumble on {}.", whereabouts(state), artifact.name);
    compose(state, artifact, message, FIND_SEPARATOR, now)
}

pub fn resolve_person(state: &GameSnapshot, person: &Card, now: u64) -> GameSnapshot {
    let message = format!(
        "While {}, a stranger beckons. It's {}!",
        whereabouts(state),
        person.name
    );
    compose(state, person, message, FIND_SEPARATOR, now)
}

fn whereabouts(state: &GameSnapshot) -> String {
    match &state.current_location {
        Some(location) => format!("on your way to {}", location.name),
        None => "wandering the wilderness".to_string(),
    }
}

/// New message first, then whatever resolution this action already produced.
fn compose(
    state: &GameSnapshot,
    card: &Card,
    message: String,
    separator: &str,
    now: u64,
) -> GameSnapshot {
    let shown = match &state.resolution {
        Some(prior) if !prior.message.is_empty() => {
            format!("{message}{separator}{}", prior.message)
        }
        _ => message.clone(),
    };
    let mut next = settle(state, card, message, now);
    next.resolution = Some(Resolution {
        message: shown,
        success: true,
    });
    next
}

fn settle(state: &GameSnapshot, card: &Card, message: String, now: u64) -> GameSnapshot {
    let mut next = state.clone();
    next.hand.retain(|held| held != card);
    next.played.push(card.clone());
    next.phase = Phase::Resolve;
    next.game_log.push(LogEntry {
        message,
        posted_at: now,
    });
    next
}
