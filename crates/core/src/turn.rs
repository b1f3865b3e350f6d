use crate::{
    draw_to, legal_plays, resolve_artifact, resolve_event, resolve_location, resolve_person,
    shuffled_deck, Action, Card, CardType, Clock, GameConfig, GameSnapshot, LogEntry, Phase,
    RngState,
};
use thiserror::Error;

pub const NEW_GAME_MESSAGE: &str = "[New Game]";
pub const GAME_OVER_MESSAGE: &str = "[Game Over]";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid card type: {kind} cannot be played in {phase}")]
    InvalidCardType { phase: Phase, kind: CardType },
    #[error("cannot play a card now ({0})")]
    IllegalPhase(Phase),
    #[error("nothing to find with {card} at this location")]
    UnhandledFind { card: String },
    #[error("a card must be played in {0}")]
    MissingCard(Phase),
    #[error("{card} is not in hand")]
    CardNotInHand { card: String },
    #[error("no location is waiting to be resolved")]
    NoPendingLocation,
    #[error("nothing to continue from ({0})")]
    NothingToContinue(Phase),
}

/// Owns the effects a transition may need: shuffling and timestamps.
#[derive(Debug)]
pub struct Dealer {
    pub config: GameConfig,
    rng: RngState,
    clock: Box<dyn Clock>,
}

impl Dealer {
    pub fn new(config: GameConfig, rng: RngState, clock: Box<dyn Clock>) -> Self {
        Self { config, rng, clock }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The transition function. `state` is never modified; on error it is still
    /// the current game.
    pub fn reduce(
        &mut self,
        state: &GameSnapshot,
        action: &Action,
    ) -> Result<GameSnapshot, RuleError> {
        let next = match action {
            Action::NewGame => {
                let deck = shuffled_deck(&mut self.rng);
                Ok(self.deal_from(state, deck))
            }
            Action::PlayCard { card } => self.play_card(state, card.as_ref()),
            Action::Continue => self.continue_turn(state),
            Action::Unknown => {
                log::debug!("unhandled action in {}; state unchanged", state.phase);
                return Ok(state.clone());
            }
        }?;
        log::debug!("{}: {} -> {}", action.name(), state.phase, next.phase);
        Ok(next)
    }

    /// Starts a game from `deck` in the given order. The previous game's log is
    /// kept; every other zone is reset.
    pub fn deal_from(&mut self, state: &GameSnapshot, deck: Vec<Card>) -> GameSnapshot {
        let (hand, deck) = draw_to(&deck, &[], self.config.hand_capacity);
        let mut game_log = state.game_log.clone();
        game_log.push(LogEntry {
            message: NEW_GAME_MESSAGE.to_string(),
            posted_at: self.clock.now_millis(),
        });
        log::info!("new game dealt: {} in hand, {} in deck", hand.len(), deck.len());
        self.enter_turn(GameSnapshot {
            hand,
            deck,
            game_log,
            ..GameSnapshot::default()
        })
    }

    fn play_card(
        &mut self,
        state: &GameSnapshot,
        card: Option<&Card>,
    ) -> Result<GameSnapshot, RuleError> {
        match state.phase {
            Phase::PlayForTurn => self.play_for_turn(state, card),
            Phase::PlayingLocation => self.play_at_location(state, card),
            Phase::Resolve | Phase::EndGame => Err(RuleError::IllegalPhase(state.phase)),
        }
    }

    fn play_for_turn(
        &mut self,
        state: &GameSnapshot,
        card: Option<&Card>,
    ) -> Result<GameSnapshot, RuleError> {
        let card = card.ok_or(RuleError::MissingCard(state.phase))?;
        if !legal_plays(state.phase).contains(&card.kind) {
            return Err(RuleError::InvalidCardType {
                phase: state.phase,
                kind: card.kind,
            });
        }
        ensure_in_hand(state, card)?;
        match card.kind {
            CardType::Location => Ok(GameSnapshot {
                playing_card: Some(card.clone()),
                phase: Phase::PlayingLocation,
                ..state.clone()
            }),
            CardType::Event => Ok(resolve_event(state, card, self.clock.now_millis())),
            CardType::Artifact | CardType::Person => Err(RuleError::InvalidCardType {
                phase: state.phase,
                kind: card.kind,
            }),
        }
    }

    fn play_at_location(
        &mut self,
        state: &GameSnapshot,
        found: Option<&Card>,
    ) -> Result<GameSnapshot, RuleError> {
        let visiting = state
            .playing_card
            .as_ref()
            .ok_or(RuleError::NoPendingLocation)?;
        ensure_in_hand(state, visiting)?;
        if let Some(found) = found {
            if !legal_plays(state.phase).contains(&found.kind) {
                return Err(RuleError::UnhandledFind {
                    card: found.name.clone(),
                });
            }
            ensure_in_hand(state, found)?;
        }

        let visited = resolve_location(state, visiting, self.clock.now_millis());
        let mut next = match found {
            None => visited,
            Some(found) => {
                let now = self.clock.now_millis();
                match found.kind {
                    CardType::Artifact => resolve_artifact(&visited, found, now),
                    CardType::Event => resolve_event(&visited, found, now),
                    CardType::Person => resolve_person(&visited, found, now),
                    CardType::Location => {
                        return Err(RuleError::UnhandledFind {
                            card: found.name.clone(),
                        })
                    }
                }
            }
        };
        next.playing_card = None;
        Ok(next)
    }

    fn continue_turn(&mut self, state: &GameSnapshot) -> Result<GameSnapshot, RuleError> {
        if state.phase != Phase::Resolve {
            return Err(RuleError::NothingToContinue(state.phase));
        }
        let (hand, deck) = draw_to(&state.deck, &state.hand, self.config.hand_capacity);
        Ok(self.enter_turn(GameSnapshot {
            hand,
            deck,
            resolution: None,
            ..state.clone()
        }))
    }

    /// Every entry into `PlayForTurn` goes through here so a dead hand ends the game.
    fn enter_turn(&mut self, mut state: GameSnapshot) -> GameSnapshot {
        state.phase = Phase::PlayForTurn;
        if self.config.end_on_no_plays && !state.has_legal_play() {
            state.phase = Phase::EndGame;
            state.game_log.push(LogEntry {
                message: GAME_OVER_MESSAGE.to_string(),
                posted_at: self.clock.now_millis(),
            });
            log::info!(
                "no legal plays left; game over with {} cards played",
                state.played.len()
            );
        }
        state
    }
}

fn ensure_in_hand(state: &GameSnapshot, card: &Card) -> Result<(), RuleError> {
    if state.in_hand(card) {
        Ok(())
    } else {
        Err(RuleError::CardNotInHand {
            card: card.name.clone(),
        })
    }
}
