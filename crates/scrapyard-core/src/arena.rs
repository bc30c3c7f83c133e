//! Arena: the battlefield container and turn scheduler.
//!
//! The arena owns everything for the duration of a run: the board, the
//! roster of robot states, the boxed strategy agents, and the seeded RNG
//! that feeds terrain generation, placement, and damage rolls. Robots
//! act strictly in recruitment order, one full pass per round, until a
//! single survivor remains or the round cap trips.
//!
//! # Turn order semantics
//!
//! Rounds are synchronous and single-threaded. Each robot's decisions are
//! applied to the board before the next robot is consulted, so robots
//! later in the order observe earlier robots' moves and deaths within the
//! same round. That is an intentional ordering dependency, not a race.
//!
//! # Determinism
//!
//! Given the same seed, the same roster in the same order, and the same
//! strategy behavior, a run reproduces exactly: the only random source is
//! the arena's own `ChaCha8Rng`.
//!
//! # Example
//!
//! ```
//! use scrapyard_core::agents;
//! use scrapyard_core::arena::Arena;
//! use scrapyard_core::config::ArenaConfig;
//!
//! let config = ArenaConfig {
//!     seed: 42,
//!     max_rounds: 1_000,
//!     ..ArenaConfig::default()
//! };
//! let mut arena = Arena::new(config).unwrap();
//! for agent in agents::standard_roster() {
//!     arena.recruit(agent).unwrap();
//! }
//! let verdict = arena.run().unwrap();
//! println!("{verdict:?}");
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::grid::{Board, CellKind, GridPos};
use crate::movement;
use crate::radar;
use crate::robot::{Chassis, RobotId, RobotState};
use crate::weapons;

// =============================================================================
// Verdict
// =============================================================================

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Exactly one robot survived.
    Champion(RobotId),
    /// Everyone is dead, or the round cap tripped first.
    Stalemate,
}

// =============================================================================
// Arena
// =============================================================================

/// The battlefield and its scheduler.
pub struct Arena {
    config: ArenaConfig,
    board: Board,
    roster: Vec<RobotState>,
    agents: Vec<Box<dyn Agent>>,
    rng: ChaCha8Rng,
    round: u64,
}

impl Arena {
    /// Builds an arena from a validated config: seeds the RNG, lays the
    /// board, scatters terrain.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidDimensions`] when the config's board size is
    /// not positive.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut board = Board::new(config.rows, config.cols);
        board.seed_terrain(&mut rng, config.terrain_density);
        Ok(Self {
            config,
            board,
            roster: Vec::new(),
            agents: Vec::new(),
            rng,
            round: 0,
        })
    }

    /// Recruits a strategy into the arena.
    ///
    /// Reads the agent's chassis (re-clamping it into the build budget),
    /// assigns the next roster id, and places the robot on a random
    /// vacant cell. Recruitment order is turn order.
    ///
    /// # Errors
    ///
    /// [`ArenaError::BoardFull`] when no vacant cell remains.
    pub fn recruit(&mut self, agent: Box<dyn Agent>) -> Result<RobotId, ArenaError> {
        let pos = self
            .board
            .random_vacancy(&mut self.rng)
            .ok_or_else(|| ArenaError::BoardFull {
                name: agent.chassis().name,
            })?;
        self.enlist(agent, pos)
    }

    /// Recruits a strategy at an exact cell.
    ///
    /// For scripted setups and tests; the cell must be vacant.
    ///
    /// # Errors
    ///
    /// [`ArenaError::BoardFull`] when the requested cell is not empty.
    pub fn recruit_at(
        &mut self,
        agent: Box<dyn Agent>,
        pos: GridPos,
    ) -> Result<RobotId, ArenaError> {
        if self.board.get(pos) != Some(CellKind::Empty) {
            return Err(ArenaError::BoardFull {
                name: agent.chassis().name,
            });
        }
        self.enlist(agent, pos)
    }

    fn enlist(&mut self, agent: Box<dyn Agent>, pos: GridPos) -> Result<RobotId, ArenaError> {
        let declared = agent.chassis();
        let chassis = Chassis::new(
            declared.name.clone(),
            declared.speed,
            declared.armor,
            declared.weapon,
        );
        let id = RobotId::new(self.roster.len() as u32);
        let bounds = (self.board.rows(), self.board.cols());

        tracing::info!(robot = %id, name = %chassis.name, at = %pos, "recruited");
        self.board.set(pos, CellKind::Robot(id));
        self.roster.push(RobotState::new(id, chassis, pos, bounds));
        self.agents.push(agent);
        Ok(id)
    }

    /// Runs the simulation to its verdict.
    ///
    /// # Errors
    ///
    /// [`ArenaError::NoRobotsLoaded`] when the roster is empty; nothing
    /// is simulated in that case.
    pub fn run(&mut self) -> Result<Verdict, ArenaError> {
        if self.roster.is_empty() {
            return Err(ArenaError::NoRobotsLoaded);
        }
        loop {
            if let Some(verdict) = self.verdict() {
                tracing::info!(round = self.round, ?verdict, "run finished");
                return Ok(verdict);
            }
            self.play_round();
        }
    }

    /// Plays one full round: every robot, in recruitment order, takes a
    /// turn. Front ends that render between rounds drive this directly.
    pub fn play_round(&mut self) {
        self.round += 1;
        tracing::debug!(round = self.round, "round start");
        for idx in 0..self.roster.len() {
            self.take_turn(idx);
        }
    }

    /// One robot's turn: radar, then shoot *or* move.
    ///
    /// Shooting takes priority and consumes the turn; a robot that fires
    /// is never asked for a move order.
    fn take_turn(&mut self, idx: usize) {
        if !self.roster[idx].is_alive() {
            return;
        }
        let id = self.roster[idx].id();

        if self.roster[idx].radar_enabled() {
            let request = self.agents[idx].radar(&self.roster[idx]);
            let sweep = radar::scan(&self.board, &self.roster[idx], request);
            self.agents[idx].observe(&self.roster[idx], &sweep);
        }

        if let Some(target) = self.agents[idx].fire(&self.roster[idx]) {
            weapons::resolve_shot(&self.board, &mut self.roster, id, target, &mut self.rng);
            self.bury_the_dead();
        } else if let Some(order) = self.agents[idx].advance(&self.roster[idx]) {
            movement::resolve_move(&mut self.board, &mut self.roster, id, order, &mut self.rng);
            self.bury_the_dead();
        }
    }

    /// Swaps the occupancy marker of every newly dead robot for a wreck.
    fn bury_the_dead(&mut self) {
        for state in &self.roster {
            if !state.is_alive() && self.board.robot_at(state.position()) == Some(state.id()) {
                tracing::info!(robot = %state.id(), name = %state.name(), "destroyed");
                self.board.mark_wreck(state.position());
            }
        }
    }

    /// The current verdict, if the run is over.
    ///
    /// `Champion` when exactly one robot is alive; `Stalemate` when none
    /// are, or when the round cap has been reached.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.winner() {
            Some(id) => Some(Verdict::Champion(id)),
            None if self.alive_count() == 0 => Some(Verdict::Stalemate),
            None if self.round >= self.config.max_rounds => Some(Verdict::Stalemate),
            None => None,
        }
    }

    /// The sole survivor, if exactly one robot is alive.
    #[must_use]
    pub fn winner(&self) -> Option<RobotId> {
        let mut alive = self.roster.iter().filter(|s| s.is_alive());
        match (alive.next(), alive.next()) {
            (Some(survivor), None) => Some(survivor.id()),
            _ => None,
        }
    }

    /// Number of robots still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.roster.iter().filter(|s| s.is_alive()).count()
    }

    /// Read access to the board, for renderers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scripted setups before the run starts.
    /// Avoid mutating mid-run; the resolvers own the board then.
    #[must_use]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Read access to every robot's state, in roster (turn) order.
    #[must_use]
    pub fn roster(&self) -> &[RobotState] {
        &self.roster
    }

    /// Mutable access to a robot's state, for scripted setups and tests.
    #[must_use]
    pub fn roster_mut(&mut self) -> &mut [RobotState] {
        &mut self.roster
    }

    /// Rounds played so far.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// The seed this arena was built with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.config.seed
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("round", &self.round)
            .field("robots", &self.roster.len())
            .field("alive", &self.alive_count())
            .field("seed", &self.config.seed)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
