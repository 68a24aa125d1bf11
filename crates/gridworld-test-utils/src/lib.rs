//! Test utilities for gridworld development.
//!
//! Hand-built entities for scripted layouts, matching the parameters the
//! engine's factory produces, plus small layout helpers.

use gridworld_core::{Category, Entity, Position};

/// The agent at `(x, y)`.
pub fn agent_at(x: u32, y: u32) -> Entity {
    entity(Category::Agent, x, y)
}

/// A reward object (+1) at `(x, y)`.
pub fn reward_at(x: u32, y: u32) -> Entity {
    entity(Category::RewardObject, x, y)
}

/// A hazard object (-1) at `(x, y)`.
pub fn hazard_at(x: u32, y: u32) -> Entity {
    entity(Category::HazardObject, x, y)
}

/// A unit-size, full-intensity entity of `category` at `(x, y)`.
pub fn entity(category: Category, x: u32, y: u32) -> Entity {
    let (channel, reward) = match category {
        Category::Agent => (2, None),
        Category::RewardObject => (1, Some(1.0)),
        Category::HazardObject => (0, Some(-1.0)),
    };
    Entity {
        position: Position::new(x, y),
        size: 1,
        intensity: 1.0,
        channel,
        reward,
        category,
    }
}

/// A layout with the agent at `agent` followed by the given objects.
pub fn layout(agent: (u32, u32), objects: &[(Category, u32, u32)]) -> Vec<Entity> {
    let mut out = Vec::with_capacity(objects.len() + 1);
    out.push(agent_at(agent.0, agent.1));
    out.extend(objects.iter().map(|&(c, x, y)| entity(c, x, y)));
    out
}

/// Whether every entity sits on its own cell.
pub fn all_distinct(entities: &[Entity]) -> bool {
    let mut seen: Vec<Position> = entities.iter().map(|e| e.position).collect();
    seen.sort();
    seen.windows(2).all(|w| w[0] != w[1])
}
