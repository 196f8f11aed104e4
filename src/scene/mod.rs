//! Host-facing scene model.
//!
//! The pipeline only needs a flat list of [`SceneShape`]s; hosts with their
//! own entity system implement [`ShapeSource`] directly. [`SceneGraph`] is a
//! minimal arena-backed host for embedders and tests.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::SceneError;
use crate::geometry::{Shape, ShapeDescriptor};
use crate::math::Transform2;

slotmap::new_key_type! {
    /// Unique identifier for an entity in a [`SceneGraph`].
    pub struct EntityId;
}

/// Logical scene partition a shape belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContextId(pub u32);

/// A collider as reported by the host for one pipeline pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneShape {
    pub descriptor: ShapeDescriptor,
    /// Trigger-only colliders have no solid interaction.
    pub is_trigger: bool,
    pub context: ContextId,
    /// Owning entity's name followed by its ancestors' names, nearest first.
    pub lineage: Vec<String>,
}

/// Enumerates the colliders currently present in the host scene.
pub trait ShapeSource {
    fn scene_shapes(&self) -> Vec<SceneShape>;
}

impl ShapeSource for [SceneShape] {
    fn scene_shapes(&self) -> Vec<SceneShape> {
        self.to_vec()
    }
}

impl ShapeSource for Vec<SceneShape> {
    fn scene_shapes(&self) -> Vec<SceneShape> {
        self.clone()
    }
}

/// A collider attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub shape: Shape,
    pub is_trigger: bool,
}

/// Data associated with a scene entity.
#[derive(Debug, Clone)]
pub struct EntityData {
    pub name: String,
    pub parent: Option<EntityId>,
    /// World placement, owned by the host.
    pub transform: Transform2,
    pub context: ContextId,
    pub collider: Option<Collider>,
}

impl EntityData {
    /// Creates an entity without parent or collider.
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Transform2, context: ContextId) -> Self {
        Self {
            name: name.into(),
            parent: None,
            transform,
            context,
            collider: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_collider(mut self, shape: Shape, is_trigger: bool) -> Self {
        self.collider = Some(Collider { shape, is_trigger });
        self
    }
}

/// Arena of named entities forming a parent hierarchy.
#[derive(Debug, Default)]
pub struct SceneGraph {
    entities: SlotMap<EntityId, EntityData>,
}

impl SceneGraph {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity and returns its ID.
    pub fn add_entity(&mut self, data: EntityData) -> EntityId {
        self.entities.insert(data)
    }

    /// Removes an entity. Children keep a dangling parent and end their
    /// lineage there.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<EntityData> {
        self.entities.remove(id)
    }

    /// Returns a reference to the entity data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn entity(&self, id: EntityId) -> Result<&EntityData, SceneError> {
        self.entities
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("entity".into()))
    }

    /// Returns a mutable reference to the entity data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the scene.
    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut EntityData, SceneError> {
        self.entities
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("entity".into()))
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Names from `id` up to the root, nearest first.
    ///
    /// Stops at a missing parent and guards against parent cycles.
    #[must_use]
    pub fn lineage(&self, id: EntityId) -> Vec<String> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let Some(entity) = self.entities.get(cur) else {
                break;
            };
            if names.len() > self.entities.len() {
                break;
            }
            names.push(entity.name.clone());
            current = entity.parent;
        }
        names
    }
}

impl ShapeSource for SceneGraph {
    fn scene_shapes(&self) -> Vec<SceneShape> {
        self.entities
            .iter()
            .filter_map(|(id, entity)| {
                let collider = entity.collider.as_ref()?;
                Some(SceneShape {
                    descriptor: ShapeDescriptor::new(collider.shape.clone(), entity.transform),
                    is_trigger: collider.is_trigger,
                    context: entity.context,
                    lineage: self.lineage(id),
                })
            })
            .collect()
    }
}
