use crate::dsl::Step;
use crate::error::SchemaError;
use ahash::AHashMap;

/// O(1) lookup tables over a document's step sequence, used by the edge
/// phase to resolve successor references.
#[derive(Debug)]
pub struct StepIndex<'a> {
    by_id: AHashMap<&'a str, &'a Step>,
    names: AHashMap<&'a str, &'a str>,
}

impl<'a> StepIndex<'a> {
    /// Indexes the steps in a single pass.
    ///
    /// A step id that is already registered is a [`SchemaError::DuplicateStepId`]:
    /// letting the later step win would silently rewire every inbound edge
    /// of the collided id.
    pub fn build(steps: &'a [Step]) -> Result<Self, SchemaError> {
        let mut by_id = AHashMap::with_capacity(steps.len());
        let mut names = AHashMap::with_capacity(steps.len());

        for step in steps {
            if by_id.insert(step.id.as_str(), step).is_some() {
                return Err(SchemaError::DuplicateStepId(step.id.clone()));
            }
            names.insert(step.id.as_str(), step.name.as_str());
        }

        Ok(Self { by_id, names })
    }

    /// Whether `id` names a registered step.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&'a Step> {
        self.by_id.get(id).copied()
    }

    /// Display name of a registered step.
    pub fn name_of(&self, id: &str) -> Option<&'a str> {
        self.names.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
