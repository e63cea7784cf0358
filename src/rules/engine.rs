//! The turn state machine.
//!
//! `GameEngine` is the single owner of every card container and the
//! only thing that mutates the discard pile. A turn runs:
//!
//! 1. Draw a room (carryover first). A short room wins the game.
//! 2. Room decision: skip (unless the last room was skipped) or enter.
//! 3. Resolve three cards, checking for death after each.
//! 4. The fourth card carries over; go to 1.
//!
//! ```
//! use scoundrel::core::GameConfig;
//! use scoundrel::rules::{GameEngine, Phase};
//! use scoundrel::zones::SkipOutcome;
//!
//! let mut engine = GameEngine::new(GameConfig::new().with_seed(42));
//! assert_eq!(engine.phase(), Phase::AwaitingRoomDecision);
//!
//! assert_eq!(engine.submit_skip_decision(false), SkipOutcome::Declined);
//! let resolution = engine.submit_card_choice(0).unwrap();
//! assert_eq!(
//!     resolution.phase.outcome().is_none(),
//!     engine.query_state().health > 0
//! );
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::phase::{Outcome, Phase, Resolution};
use super::snapshot::Snapshot;
use crate::cards::{Card, CardKind};
use crate::combat::CombatantState;
use crate::core::action::{ActionRecord, Command};
use crate::core::config::{GameConfig, ACTIONS_PER_ROOM};
use crate::core::error::EngineError;
use crate::core::rng::{GameRng, GameRngState};
use crate::events::GameEvent;
use crate::zones::{Census, Deck, DiscardPile, Room, RoomManager, SkipOutcome, Zone};

/// Result of [`GameEngine::apply`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Applied {
    Room(SkipOutcome),
    Card(Resolution),
}

/// A single game of Scoundrel.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,

    deck: Deck,
    room: Room,
    carryover: Option<Card>,
    discard: DiscardPile,
    combatant: CombatantState,
    rooms: RoomManager,

    potion_used_this_turn: bool,
    phase: Phase,
    turn: u32,

    history: Vector<ActionRecord>,
    sequence: u32,

    // Deck order and shuffle position before the first room was dealt
    starting_deck: Deck,
    starting_rng: GameRngState,
}

impl GameEngine {
    /// Start a game with a freshly built and shuffled deck.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);
        Self::start(config, rng, deck)
    }

    /// Start a game on a deck in a known order (front is drawn first).
    ///
    /// The deck is used as given, without shuffling. Skips still
    /// reshuffle with the config's seed.
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::start(config, rng, deck)
    }

    /// Rebuild a game started with [`GameEngine::new`] by replaying
    /// `commands` from the start.
    ///
    /// `config` must carry the seed of the game being reproduced. Games
    /// started with [`GameEngine::with_deck`] are rebuilt with
    /// [`GameEngine::replay_history`] instead. Room decisions that no
    /// longer apply are ignored.
    pub fn replay<I>(config: GameConfig, commands: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut engine = Self::new(config);
        for command in commands {
            engine.apply(command)?;
        }
        Ok(engine)
    }

    /// Rebuild this game from its starting deck and recorded history.
    ///
    /// Works for any constructor, including [`GameEngine::with_deck`].
    /// With history disabled this is the game as first dealt.
    pub fn replay_history(&self) -> Result<Self, EngineError> {
        let mut engine = Self::start(
            self.config.clone(),
            GameRng::from_state(&self.starting_rng),
            self.starting_deck.clone(),
        );
        for record in &self.history {
            engine.apply(record.command)?;
        }
        Ok(engine)
    }

    fn start(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        debug!(seed = rng.seed(), deck = deck.len(), "starting game");
        let starting_deck = deck.clone();
        let starting_rng = rng.state();
        let mut engine = Self {
            config,
            rng,
            deck,
            room: Room::default(),
            carryover: None,
            discard: DiscardPile::new(),
            combatant: CombatantState::new(),
            rooms: RoomManager::new(),
            potion_used_this_turn: false,
            phase: Phase::AwaitingRoomDecision,
            turn: 1,
            history: Vector::new(),
            sequence: 0,
            starting_deck,
            starting_rng,
        };
        engine.start_turn();
        engine
    }

    // === Queries ===

    /// Read-only snapshot for rendering.
    #[must_use]
    pub fn query_state(&self) -> Snapshot {
        Snapshot {
            health: self.combatant.health(),
            weapon: self.combatant.weapon().copied(),
            ladder: self.combatant.ladder().to_vec(),
            discard_pile: self.discard.cards().to_vec(),
            current_room: self.room.cards().to_vec(),
            can_skip: self.can_skip(),
            potion_used_this_turn: self.potion_used_this_turn,
            deck_remaining: self.deck.len(),
            turn: self.turn,
            phase: self.phase,
        }
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a room decision is pending and skipping is allowed.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.phase == Phase::AwaitingRoomDecision && self.rooms.can_skip()
    }

    #[must_use]
    pub fn combatant(&self) -> &CombatantState {
        &self.combatant
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn potion_used_this_turn(&self) -> bool {
        self.potion_used_this_turn
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the engine's shuffle stream (also for unseeded configs).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current position of the shuffle stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Deck order the game started from, before any room was dealt.
    #[must_use]
    pub fn starting_deck(&self) -> &Deck {
        &self.starting_deck
    }

    /// Accepted commands, oldest first. Empty if history is disabled.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Commands that would currently be accepted.
    ///
    /// Card choices made while a room decision is pending are also
    /// accepted (they enter the room), but are not listed here.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        match self.phase {
            Phase::AwaitingRoomDecision => {
                let mut commands = vec![Command::Skip(false)];
                if self.rooms.can_skip() {
                    commands.push(Command::Skip(true));
                }
                commands
            }
            Phase::ResolvingRoom { .. } => (0..self.room.len()).map(Command::Choose).collect(),
            Phase::GameOver(_) => Vec::new(),
        }
    }

    /// Where every card currently is.
    #[must_use]
    pub fn census(&self) -> Census {
        Census::new()
            .with(Zone::Deck, self.deck.cards())
            .with(Zone::Room, self.room.cards())
            .with(Zone::Carryover, self.carryover.iter())
            .with(Zone::Weapon, self.combatant.weapon())
            .with(Zone::Ladder, self.combatant.ladder())
            .with(Zone::Discard, self.discard.cards())
    }

    // === Commands ===

    /// Apply any command.
    pub fn apply(&mut self, command: Command) -> Result<Applied, EngineError> {
        match command {
            Command::Skip(skip) => Ok(Applied::Room(self.submit_skip_decision(skip))),
            Command::Choose(index) => self.submit_card_choice(index).map(Applied::Card),
        }
    }

    /// Answer the room decision.
    ///
    /// A successful skip returns the room to the deck and deals the next
    /// one; a rejected skip or `false` enters the current room.
    pub fn submit_skip_decision(&mut self, skip: bool) -> SkipOutcome {
        if self.phase != Phase::AwaitingRoomDecision {
            return SkipOutcome::NotApplicable;
        }

        let outcome = if skip {
            self.rooms.skip_room(&mut self.deck, &mut self.room, &mut self.rng)
        } else {
            SkipOutcome::Declined
        };
        self.record(Command::Skip(skip));

        match outcome {
            SkipOutcome::Skipped => {
                debug!(turn = self.turn, "room skipped");
                self.turn += 1;
                self.start_turn();
            }
            _ => {
                debug!(turn = self.turn, ?outcome, "entering room");
                self.enter_room();
            }
        }
        outcome
    }

    /// Resolve the room card at `index`.
    ///
    /// While a room decision is pending this enters the room first. An
    /// out-of-range index leaves the game untouched.
    pub fn submit_card_choice(&mut self, index: usize) -> Result<Resolution, EngineError> {
        if let Phase::GameOver(outcome) = self.phase {
            return Err(EngineError::GameOver(outcome));
        }
        if index >= self.room.len() {
            return Err(EngineError::InvalidCardIndex {
                index,
                room_size: self.room.len(),
            });
        }
        if self.phase == Phase::AwaitingRoomDecision {
            self.enter_room();
        }
        let Some(card) = self.room.take(index) else {
            return Err(EngineError::InvalidCardIndex {
                index,
                room_size: self.room.len(),
            });
        };
        self.record(Command::Choose(index));

        let event = self.resolve(card);
        debug!(turn = self.turn, %event, "resolved card");
        self.discard.extend(event.discarded());

        if self.combatant.is_dead() {
            self.finish(Outcome::Loss);
        } else if let Phase::ResolvingRoom { remaining_actions } = self.phase {
            let remaining_actions = remaining_actions.saturating_sub(1);
            if remaining_actions == 0 {
                self.leave_room();
            } else {
                self.phase = Phase::ResolvingRoom { remaining_actions };
            }
        }

        Ok(Resolution {
            event,
            phase: self.phase,
        })
    }

    // === Turn flow ===

    fn resolve(&mut self, card: Card) -> GameEvent {
        match card.kind() {
            CardKind::Monster => GameEvent::MonsterFought(self.combatant.attack(card)),
            CardKind::Weapon => GameEvent::WeaponEquipped {
                weapon: card,
                discarded: self.combatant.equip_weapon(card),
            },
            CardKind::Potion => {
                let report = self.combatant.use_potion(card, self.potion_used_this_turn);
                self.potion_used_this_turn |= report.consumed;
                GameEvent::PotionUsed(report)
            }
        }
    }

    fn start_turn(&mut self) {
        self.room = self.rooms.draw_room(&mut self.deck, self.carryover.take());
        debug!(
            turn = self.turn,
            room = self.room.len(),
            deck = self.deck.len(),
            "room drawn"
        );

        if self.room.is_full() {
            self.phase = Phase::AwaitingRoomDecision;
        } else {
            self.finish(Outcome::Win);
        }
    }

    fn enter_room(&mut self) {
        self.rooms.enter_room();
        self.potion_used_this_turn = false;
        self.phase = Phase::ResolvingRoom {
            remaining_actions: ACTIONS_PER_ROOM,
        };
    }

    fn leave_room(&mut self) {
        let mut leftover = self.room.drain().into_iter();
        self.carryover = leftover.next();
        debug_assert!(leftover.next().is_none(), "more than one card left in the room");
        self.turn += 1;
        self.start_turn();
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(
            turn = self.turn,
            health = self.combatant.health(),
            %outcome,
            "game over"
        );
        self.phase = Phase::GameOver(outcome);
    }

    fn record(&mut self, command: Command) {
        if !self.config.record_history {
            return;
        }
        self.sequence += 1;
        self.history
            .push_back(ActionRecord::new(command, self.turn, self.sequence));
    }
}
