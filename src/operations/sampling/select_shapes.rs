use tracing::trace;

use crate::geometry::ShapeDescriptor;
use crate::scene::{ContextId, SceneShape};

/// Filters host colliders down to the ones that contribute solid geometry.
///
/// A shape is dropped when it is a trigger, lives in another context, or
/// any name in its lineage is on the exclusion list.
pub struct SelectShapes<'a> {
    context: ContextId,
    exclusions: &'a [String],
}

impl<'a> SelectShapes<'a> {
    /// Creates a new `SelectShapes` operation.
    #[must_use]
    pub fn new(context: ContextId, exclusions: &'a [String]) -> Self {
        Self {
            context,
            exclusions,
        }
    }

    /// Returns the first lineage name found on the exclusion list.
    #[must_use]
    pub fn excluded_by<'s>(&self, lineage: &'s [String]) -> Option<&'s str> {
        lineage
            .iter()
            .find(|name| self.exclusions.iter().any(|ex| ex == *name))
            .map(String::as_str)
    }

    /// Executes the selection, keeping host order.
    #[must_use]
    pub fn execute(&self, shapes: Vec<SceneShape>) -> Vec<ShapeDescriptor> {
        shapes
            .into_iter()
            .filter(|s| {
                if s.is_trigger {
                    trace!(kind = s.descriptor.shape.kind(), "skipping trigger shape");
                    return false;
                }
                if s.context != self.context {
                    return false;
                }
                if let Some(name) = self.excluded_by(&s.lineage) {
                    trace!(name, "skipping shape under excluded entity");
                    return false;
                }
                true
            })
            .map(|s| s.descriptor)
            .collect()
    }
}
