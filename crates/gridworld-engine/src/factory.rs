//! Entity factory with the fixed per-category parameter table.

use gridworld_core::{Category, Entity, GridError, Position};

/// Reward paid out when the agent reaches a reward object.
pub const REWARD_OBJECT_PAYOUT: f32 = 1.0;

/// Reward paid out when the agent reaches a hazard object.
pub const HAZARD_OBJECT_PAYOUT: f32 = -1.0;

/// Build the entity of `category` at `position`.
///
/// | category | size | intensity | channel | reward |
/// |---|---|---|---|---|
/// | agent | 1 | 1.0 | 2 | none |
/// | reward | 1 | 1.0 | 1 | +1 |
/// | hazard | 1 | 1.0 | 0 | -1 |
pub fn generate_entity(position: Position, category: Category) -> Entity {
    let (channel, reward) = match category {
        Category::Agent => (2, None),
        Category::RewardObject => (1, Some(REWARD_OBJECT_PAYOUT)),
        Category::HazardObject => (0, Some(HAZARD_OBJECT_PAYOUT)),
    };
    Entity {
        position,
        size: 1,
        intensity: 1.0,
        channel,
        reward,
        category,
    }
}

/// Build an entity from a raw category tag such as `"goal"` or `"fire"`.
///
/// # Errors
///
/// Returns [`GridError::UnknownCategory`] if `tag` names no category.
pub fn generate_entity_from_tag(position: Position, tag: &str) -> Result<Entity, GridError> {
    let category = tag.parse::<Category>()?;
    Ok(generate_entity(position, category))
}

/// The reward an entity of this category is expected to carry.
pub(crate) fn expected_payout(category: Category) -> Option<f32> {
    match category {
        Category::Agent => None,
        Category::RewardObject => Some(REWARD_OBJECT_PAYOUT),
        Category::HazardObject => Some(HAZARD_OBJECT_PAYOUT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_table() {
        let p = Position::new(3, 4);
        let agent = generate_entity(p, Category::Agent);
        assert_eq!((agent.size, agent.channel, agent.reward), (1, 2, None));
        assert_eq!(agent.intensity, 1.0);

        let goal = generate_entity(p, Category::RewardObject);
        assert_eq!((goal.size, goal.channel, goal.reward), (1, 1, Some(1.0)));

        let hazard = generate_entity(p, Category::HazardObject);
        assert_eq!(
            (hazard.size, hazard.channel, hazard.reward),
            (1, 0, Some(-1.0))
        );
        assert_eq!(hazard.position, p);
    }

    #[test]
    fn generated_entities_are_well_formed() {
        for category in [
            Category::Agent,
            Category::RewardObject,
            Category::HazardObject,
        ] {
            assert!(generate_entity(Position::new(0, 0), category)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn tag_lookup() {
        let e = generate_entity_from_tag(Position::new(1, 1), "goal").unwrap();
        assert_eq!(e.category, Category::RewardObject);
        assert_eq!(
            generate_entity_from_tag(Position::new(1, 1), "wall"),
            Err(GridError::UnknownCategory {
                tag: "wall".into()
            })
        );
    }
}
