//! Drawable entities
//!
//! Entities are a closed set of variants. Each owns a [`Transform`] and
//! paints itself onto whatever [`Surface`] it is handed.

pub mod block;
pub mod guide;

pub use block::{Block, DEFAULT_BLOCK_COLOR};
pub use guide::Guide;

use crate::geom::{Transform, Vector2d};
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Block(Block),
    Guide(Guide),
}

impl Entity {
    pub fn transform(&self) -> &Transform {
        match self {
            Entity::Block(block) => &block.transform,
            Entity::Guide(guide) => &guide.transform,
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Entity::Block(block) => &mut block.transform,
            Entity::Guide(guide) => &mut guide.transform,
        }
    }

    pub fn update_position(&mut self, position: Vector2d) {
        self.transform_mut().update_position(position);
    }

    pub fn reset_initial_position(&mut self) {
        self.transform_mut().reset_initial_position();
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Entity::Block(block) => block.draw(surface),
            Entity::Guide(guide) => guide.draw(surface),
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Entity::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl From<Block> for Entity {
    fn from(block: Block) -> Self {
        Entity::Block(block)
    }
}

impl From<Guide> for Entity {
    fn from(guide: Guide) -> Self {
        Entity::Guide(guide)
    }
}

/// Ordered list of entities for one render pass
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.entities.iter().filter_map(Entity::as_block)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Draw every entity in insertion order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for entity in &self.entities {
            entity.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, RecordingSurface};

    #[test]
    fn test_entity_forwards_transform_updates() {
        let mut entity = Entity::from(Block::new(1.0, 1.0, 2.0, 2.0, None).unwrap());
        entity.update_position(Vector2d::new(4.0, 4.0));
        assert_eq!(entity.transform().initial_position(), Vector2d::new(1.0, 1.0));

        entity.reset_initial_position();
        assert_eq!(entity.transform().initial_position(), Vector2d::new(4.0, 4.0));
    }

    #[test]
    fn test_scene_draws_in_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.push(Block::new(0.0, 0.0, 1.0, 1.0, None).unwrap());
        scene.push(Guide::new(Vector2d::ORIGIN, Color::rgb(0, 0, 0)));
        scene.push(Block::new(2.0, 0.0, 1.0, 1.0, None).unwrap());

        assert_eq!(scene.len(), 3);
        assert!(!scene.is_empty());
        assert_eq!(scene.blocks().count(), 2);

        let mut surface = RecordingSurface::new(10.0, 10.0);
        scene.draw(&mut surface);
        // Collapsed guide paints nothing
        assert_eq!(surface.fills().count(), 2);
    }
}
