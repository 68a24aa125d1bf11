//! The grid simulation engine.
//!
//! [`GridEngine`] is the user-facing API. Each call to
//! [`step()`](GridEngine::step) moves the agent, resolves at most one
//! collision, renders the post-collision layout, and returns a
//! [`StepOutcome`] borrowing the cached observation.
//!
//! # Lifecycle
//!
//! A freshly constructed engine is uninitialized: stepping, moving,
//! collision resolution, and rendering all fail with
//! [`GridError::NotReset`] until one of the `reset*` methods succeeds.
//! A failed reset leaves the previous episode untouched.
//!
//! # Ownership model
//!
//! `GridEngine` is [`Send`] but takes `&mut self` for every mutation, so
//! one engine serves one episode at a time. Run independent episodes
//! concurrently by constructing one engine per episode.
//!
//! # Termination
//!
//! Consuming an object never ends the episode: the object respawns and
//! the task continues. `terminal` becomes `true` only once
//! [`GridConfig::max_episode_steps`] steps have elapsed since reset.

use gridworld_core::{Category, Direction, Entity, EntityCollection, GridError, Position};
use indexmap::IndexSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::allocator::new_position;
use crate::config::{ConfigError, GridConfig};
use crate::factory::{expected_payout, generate_entity};
use crate::metrics::EpisodeMetrics;
use crate::render::{render, Observation};

/// Categories spawned by `reset()`, in placement order. Index 0 is the agent.
pub const SPAWN_ORDER: [Category; 7] = [
    Category::Agent,
    Category::RewardObject,
    Category::HazardObject,
    Category::RewardObject,
    Category::HazardObject,
    Category::RewardObject,
    Category::RewardObject,
];

/// Index of the agent in the entity collection.
const AGENT_INDEX: usize = 0;

// Compile-time assertion: GridEngine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GridEngine>();
    }
};

// ── StepOutcome ────────────────────────────────────────────────────

/// Result of a successful [`GridEngine::step()`] call.
#[derive(Debug)]
pub struct StepOutcome<'e> {
    /// Observation of the post-collision layout.
    pub observation: &'e Observation,
    /// Reward earned this step: `+1`, `-1`, or `0`.
    pub reward: f32,
    /// Whether the episode has reached its step limit.
    pub terminal: bool,
}

// ── GridEngine ─────────────────────────────────────────────────────

/// Single-agent grid environment.
///
/// Generic over the random source used for placement; the default is a
/// `ChaCha8Rng` seeded from [`GridConfig::seed`].
///
/// # Example
///
/// ```
/// use gridworld_core::Direction;
/// use gridworld_engine::{GridConfig, GridEngine};
///
/// let mut engine = GridEngine::new(GridConfig::default()).unwrap();
/// engine.reset().unwrap();
/// let outcome = engine.step(Direction::Up).unwrap();
/// assert_eq!(outcome.observation.shape(), [84, 84, 3]);
/// ```
pub struct GridEngine<R = ChaCha8Rng> {
    size: u32,
    partial: bool,
    seed: u64,
    max_episode_steps: Option<u64>,
    rng: R,
    elements: EntityCollection,
    state: Option<Observation>,
    metrics: EpisodeMetrics,
}

impl GridEngine<ChaCha8Rng> {
    /// Create an engine from a [`GridConfig`], seeding placement from
    /// `config.seed`.
    ///
    /// The engine starts uninitialized; call [`reset()`](Self::reset)
    /// before stepping.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Reseed the placement RNG with `seed`, then [`reset()`](Self::reset).
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<&Observation, GridError> {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self.reset()
    }
}

impl<R: Rng> GridEngine<R> {
    /// Create an engine that draws placements from `rng`.
    ///
    /// `config.seed` is recorded but not applied; `rng` is used as given.
    pub fn with_rng(config: GridConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            size: config.size,
            partial: config.partial,
            seed: config.seed,
            max_episode_steps: config.max_episode_steps,
            rng,
            elements: EntityCollection::new(),
            state: None,
            metrics: EpisodeMetrics::default(),
        })
    }

    // ── Episode lifecycle ──────────────────────────────────────────

    /// Start a new episode with a freshly placed layout.
    ///
    /// Spawns one agent, then reward, hazard, reward, hazard, reward,
    /// reward, each on a random cell not taken by anything placed before
    /// it. Renders and caches the initial observation.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GridFull`] if the grid cannot hold all seven
    /// entities. The engine keeps its previous state in that case.
    pub fn reset(&mut self) -> Result<&Observation, GridError> {
        let mut elements = EntityCollection::with_capacity(SPAWN_ORDER.len());
        for category in SPAWN_ORDER {
            let position = new_position(self.size, elements.positions(), &mut self.rng)?;
            elements.push(generate_entity(position, category))?;
        }
        self.install(elements)
    }

    /// Start a new episode from an explicit layout.
    ///
    /// Used for scripted scenarios and tests. The layout must hold
    /// exactly one agent, at index 0, with every entity inside the grid
    /// and on its own cell.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidElement`] for a malformed entity;
    /// [`GridError::InvalidLayout`] for a violated placement invariant.
    pub fn reset_with_layout(&mut self, layout: Vec<Entity>) -> Result<&Observation, GridError> {
        let elements = EntityCollection::try_from(layout)?;
        self.check_layout(&elements)?;
        self.install(elements)
    }

    fn check_layout(&self, elements: &EntityCollection) -> Result<(), GridError> {
        let invalid = |reason: String| GridError::InvalidLayout { reason };
        match elements.get(AGENT_INDEX) {
            Ok(e) if e.is_agent() => {}
            Ok(e) => return Err(invalid(format!("index 0 holds {}, not the agent", e.category))),
            Err(_) => return Err(invalid("layout is empty".into())),
        }
        let agents = elements.iter().filter(|e| e.is_agent()).count();
        if agents != 1 {
            return Err(invalid(format!("expected exactly one agent, found {agents}")));
        }
        let mut seen = IndexSet::with_capacity(elements.len());
        for e in elements {
            let Position { x, y } = e.position;
            if x >= self.size || y >= self.size {
                return Err(invalid(format!(
                    "{} lies outside the {}x{} grid",
                    e, self.size, self.size
                )));
            }
            if !seen.insert(e.position) {
                return Err(invalid(format!("cell {} is occupied twice", e.position)));
            }
        }
        Ok(())
    }

    fn install(&mut self, elements: EntityCollection) -> Result<&Observation, GridError> {
        let observation = render(self.size, self.partial, &elements)?;
        self.elements = elements;
        self.metrics = EpisodeMetrics::default();
        debug!(
            size = self.size,
            partial = self.partial,
            layout = %self.elements,
            "episode reset"
        );
        let observation: &Observation = self.state.insert(observation);
        Ok(observation)
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance one step: move, resolve collisions, render.
    ///
    /// The returned observation reflects the post-collision layout, so
    /// a consumed object already appears at its respawn cell.
    ///
    /// # Errors
    ///
    /// [`GridError::NotReset`] before the first reset; otherwise any
    /// error from [`resolve_collisions()`](Self::resolve_collisions). On
    /// error the move is rolled back, so the layout, metrics, and cached
    /// state are those from before the call.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome<'_>, GridError> {
        let agent_before = self.agent()?.clone();
        let metrics_before = self.metrics.clone();
        self.move_agent(direction)?;
        let (reward, collision_terminal) = match self.resolve_collisions() {
            Ok(resolved) => resolved,
            Err(err) => {
                self.elements.set(AGENT_INDEX, agent_before)?;
                self.metrics = metrics_before;
                return Err(err);
            }
        };
        let observation = self.render()?;

        self.metrics.record_step(reward);
        let truncated = self
            .max_episode_steps
            .is_some_and(|limit| self.metrics.steps >= limit);
        let terminal = collision_terminal || truncated;

        trace!(
            %direction,
            reward,
            terminal,
            step = self.metrics.steps,
            "step"
        );

        Ok(StepOutcome {
            observation: self.state.insert(observation),
            reward,
            terminal,
        })
    }

    /// Move the agent one cell in `direction`.
    ///
    /// A move that would leave the grid is a silent no-op.
    pub fn move_agent(&mut self, direction: Direction) -> Result<(), GridError> {
        let mut agent = self.agent()?.clone();
        let Position { x, y } = agent.position;
        let last = self.size - 1;
        let moved = match direction {
            Direction::Up if y >= 1 => Position::new(x, y - 1),
            Direction::Down if y < last => Position::new(x, y + 1),
            Direction::Left if x >= 1 => Position::new(x - 1, y),
            Direction::Right if x < last => Position::new(x + 1, y),
            _ => {
                self.metrics.blocked_moves += 1;
                return Ok(());
            }
        };
        agent.position = moved;
        self.elements.set(AGENT_INDEX, agent)
    }

    /// Consume the first object sharing the agent's cell, if any.
    ///
    /// The consumed object is removed and a fresh object of the same
    /// category is appended at a newly allocated cell. Returns the
    /// consumed object's reward and the collision terminal flag, which
    /// is always `false`. Without a collision, returns `(0.0, false)`.
    ///
    /// # Errors
    ///
    /// [`GridError::UnknownReward`] if the consumed object's reward does
    /// not match its category; [`GridError::GridFull`] if no cell is free
    /// for the respawn. The collection is unchanged on error; a move made
    /// beforehand through [`move_agent()`](Self::move_agent) is not undone.
    pub fn resolve_collisions(&mut self) -> Result<(f32, bool), GridError> {
        let agent_position = self.agent()?.position;
        let Some(consumed) = self
            .elements
            .iter()
            .find(|e| !e.is_agent() && e.position == agent_position)
            .cloned()
        else {
            return Ok((0.0, false));
        };

        let reward = match (consumed.reward, expected_payout(consumed.category)) {
            (Some(r), Some(expected)) if r == expected => r,
            (reward, _) => {
                return Err(GridError::UnknownReward {
                    category: consumed.category,
                    reward,
                })
            }
        };

        let respawn = new_position(self.size, self.elements.positions(), &mut self.rng)?;
        self.elements.remove(&consumed)?;
        self.elements.push(generate_entity(respawn, consumed.category))?;
        self.metrics.record_consumption(consumed.category);

        debug!(
            category = %consumed.category,
            at = %agent_position,
            %respawn,
            reward,
            "object consumed"
        );
        Ok((reward, false))
    }

    /// Render the current layout without touching the cached state.
    pub fn render(&self) -> Result<Observation, GridError> {
        self.ensure_ready()?;
        render(self.size, self.partial, &self.elements)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The fixed discrete action space, ordered by action index.
    pub fn action_space(&self) -> [Direction; Direction::COUNT] {
        Direction::ALL
    }

    /// Number of discrete actions. Always 4.
    pub fn actions(&self) -> usize {
        Direction::COUNT
    }

    /// Grid side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether observations use the 3×3 egocentric window.
    pub fn partial(&self) -> bool {
        self.partial
    }

    /// The seed the placement RNG was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configured step limit, if any.
    pub fn max_episode_steps(&self) -> Option<u64> {
        self.max_episode_steps
    }

    /// Whether a reset has succeeded.
    pub fn is_ready(&self) -> bool {
        self.state.is_some()
    }

    /// The entities on the grid, agent first.
    pub fn elements(&self) -> &EntityCollection {
        &self.elements
    }

    /// The agent entity.
    pub fn agent(&self) -> Result<&Entity, GridError> {
        self.ensure_ready()?;
        self.elements.get(AGENT_INDEX)
    }

    /// The most recently rendered observation, or `None` before reset.
    pub fn state(&self) -> Option<&Observation> {
        self.state.as_ref()
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> u64 {
        self.metrics.steps
    }

    /// Counters for the current episode.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    fn ensure_ready(&self) -> Result<(), GridError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(GridError::NotReset)
        }
    }
}

impl<R> std::fmt::Debug for GridEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("size", &self.size)
            .field("partial", &self.partial)
            .field("seed", &self.seed)
            .field("ready", &self.state.is_some())
            .field("elements", &self.elements.len())
            .field("steps", &self.metrics.steps)
            .finish()
    }
}
