//! Ordered, validated container of [`Entity`] values.
//!
//! Insertion order is significant: the engine keeps the agent at index 0
//! and appends respawned objects at the end. Every entity entering the
//! collection passes [`Entity::validate`]; a malformed entity is rejected
//! with [`GridError::InvalidElement`] and the collection is left as it was.

use std::fmt;

use crate::entity::{Entity, Position};
use crate::error::GridError;

/// An ordered sequence of well-formed entities.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityCollection {
    items: Vec<Entity>,
}

impl EntityCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `capacity` entities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an entity at the end.
    pub fn push(&mut self, entity: Entity) -> Result<(), GridError> {
        check(&entity)?;
        self.items.push(entity);
        Ok(())
    }

    /// Insert an entity at `index`, shifting later entities back.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, entity: Entity) -> Result<(), GridError> {
        if index > self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        check(&entity)?;
        self.items.insert(index, entity);
        Ok(())
    }

    /// Entity at `index`.
    pub fn get(&self, index: usize) -> Result<&Entity, GridError> {
        self.items
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Replace the entity at `index`.
    pub fn set(&mut self, index: usize, entity: Entity) -> Result<(), GridError> {
        if index >= self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        check(&entity)?;
        self.items[index] = entity;
        Ok(())
    }

    /// Remove the first entity equal to `entity`, returning it.
    pub fn remove(&mut self, entity: &Entity) -> Result<Entity, GridError> {
        let index = self
            .items
            .iter()
            .position(|e| e == entity)
            .ok_or(GridError::NotFound)?;
        Ok(self.items.remove(index))
    }

    /// Remove and return the entity at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Entity, GridError> {
        if index >= self.items.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.items.remove(index))
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no entities.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.items.iter()
    }

    /// Positions of all entities, in insertion order. May repeat.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.items.iter().map(|e| e.position)
    }

    /// Borrow the entities as a slice.
    pub fn as_slice(&self) -> &[Entity] {
        &self.items
    }

    fn out_of_bounds(&self, index: usize) -> GridError {
        GridError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        }
    }
}

fn check(entity: &Entity) -> Result<(), GridError> {
    entity
        .validate()
        .map_err(|reason| GridError::InvalidElement { reason })
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<Entity>> for EntityCollection {
    type Error = GridError;

    fn try_from(items: Vec<Entity>) -> Result<Self, Self::Error> {
        items.iter().try_for_each(check)?;
        Ok(Self { items })
    }
}

impl fmt::Display for EntityCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Category;

    fn entity(category: Category, x: u32, y: u32) -> Entity {
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

    fn sample() -> EntityCollection {
        let mut c = EntityCollection::new();
        c.push(entity(Category::Agent, 0, 0)).unwrap();
        c.push(entity(Category::RewardObject, 1, 0)).unwrap();
        c.push(entity(Category::HazardObject, 2, 0)).unwrap();
        c
    }

    #[test]
    fn push_preserves_insertion_order() {
        let c = sample();
        let cats: Vec<Category> = c.iter().map(|e| e.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Agent,
                Category::RewardObject,
                Category::HazardObject
            ]
        );
    }

    #[test]
    fn push_rejects_malformed_entity() {
        let mut c = sample();
        let mut bad = entity(Category::RewardObject, 3, 3);
        bad.channel = 9;
        assert!(matches!(
            c.push(bad),
            Err(GridError::InvalidElement { .. })
        ));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut c = sample();
        c.set(0, entity(Category::Agent, 4, 4)).unwrap();
        assert_eq!(c.get(0).unwrap().position, Position::new(4, 4));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn set_rejects_malformed_entity_and_keeps_old_value() {
        let mut c = sample();
        let mut bad = entity(Category::Agent, 4, 4);
        bad.reward = Some(1.0);
        assert!(matches!(
            c.set(0, bad),
            Err(GridError::InvalidElement { .. })
        ));
        assert_eq!(c.get(0).unwrap().position, Position::new(0, 0));
    }

    #[test]
    fn index_access_out_of_bounds() {
        let mut c = sample();
        assert_eq!(
            c.get(3).unwrap_err(),
            GridError::IndexOutOfBounds { index: 3, len: 3 }
        );
        assert!(c.set(5, entity(Category::Agent, 0, 0)).is_err());
        assert!(c.delete(3).is_err());
        assert!(c.insert(4, entity(Category::Agent, 0, 0)).is_err());
    }

    #[test]
    fn insert_shifts_later_entities() {
        let mut c = sample();
        c.insert(1, entity(Category::HazardObject, 5, 5)).unwrap();
        assert_eq!(c.get(1).unwrap().position, Position::new(5, 5));
        assert_eq!(c.get(2).unwrap().category, Category::RewardObject);
    }

    #[test]
    fn remove_by_value_takes_first_match() {
        let mut c = sample();
        c.push(entity(Category::RewardObject, 1, 0)).unwrap();
        let target = entity(Category::RewardObject, 1, 0);
        c.remove(&target).unwrap();
        assert_eq!(c.len(), 3);
        // The later duplicate survives at the end.
        assert_eq!(c.get(2).unwrap(), &target);
    }

    #[test]
    fn remove_missing_value_is_not_found() {
        let mut c = sample();
        let absent = entity(Category::RewardObject, 7, 7);
        assert_eq!(c.remove(&absent), Err(GridError::NotFound));
    }

    #[test]
    fn delete_by_index() {
        let mut c = sample();
        let removed = c.delete(1).unwrap();
        assert_eq!(removed.category, Category::RewardObject);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn try_from_vec_validates_every_entity() {
        let mut bad = entity(Category::HazardObject, 1, 1);
        bad.reward = None;
        let result = EntityCollection::try_from(vec![entity(Category::Agent, 0, 0), bad]);
        assert!(matches!(result, Err(GridError::InvalidElement { .. })));
    }

    #[test]
    fn display_lists_entities() {
        let c = sample();
        assert_eq!(
            c.to_string(),
            "[agent@(0, 0), reward@(1, 0)[+1], hazard@(2, 0)[-1]]"
        );
    }
}
