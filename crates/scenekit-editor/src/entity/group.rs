//! Groups of primitives manipulated as one unit.

use serde::{Deserialize, Serialize};

use super::{EntityId, Transform, Transformable};

/// An ordered, deduplicated collection of primitive ids with its own
/// identity and transform.
///
/// The transform is virtual: it positions the group's bounding outline and
/// highlight composite, and is never pushed down onto member nodes. Groups
/// cannot contain other groups, and a primitive belongs to at most one
/// group at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    id: EntityId,
    name: String,
    members: Vec<EntityId>,
    transform: Transform,
}

impl Group {
    /// Creates an empty group named after its id.
    pub fn new(id: EntityId) -> Self {
        let name = id.as_str().to_string();
        Self {
            id,
            name,
            members: Vec::new(),
            transform: Transform::default(),
        }
    }

    /// Creates a group from an id sequence, dropping duplicates while
    /// preserving first-occurrence order.
    pub fn from_members(id: EntityId, members: impl IntoIterator<Item = EntityId>) -> Self {
        let mut group = Self::new(id);
        for member in members {
            group.add_member(member);
        }
        group
    }

    /// Appends a member id. Returns `false` when it was already present.
    pub fn add_member(&mut self, member: EntityId) -> bool {
        if self.members.contains(&member) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Removes a member id. Returns `false` when it was not present.
    pub fn remove_member(&mut self, member: &EntityId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != member);
        self.members.len() != before
    }

    pub fn contains(&self, member: &EntityId) -> bool {
        self.members.contains(member)
    }

    /// Member ids in selection order.
    pub fn member_ids(&self) -> &[EntityId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Transformable for Group {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
