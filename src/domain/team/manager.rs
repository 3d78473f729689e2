use uuid::Uuid;

use crate::domain::common::PersonalInfo;

/// Person responsible for a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    id: Uuid,
    personal_info: PersonalInfo,
}

impl Manager {
    /// Creates a manager with a fresh identity
    pub fn create(personal_info: PersonalInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            personal_info,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    /// Reconstructs a Manager from persistence layer data
    pub fn from_persistence(id: Uuid, personal_info: PersonalInfo) -> Self {
        Self { id, personal_info }
    }
}
