//! User identifier generation

use uuid::Uuid;

use crate::domain::user::{UserId, UserIdGenerator};

/// Generates random (v4) UUIDs for new users
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl UuidV4Generator {
    pub fn new() -> Self {
        Self
    }
}

impl UserIdGenerator for UuidV4Generator {
    fn generate(&self) -> UserId {
        UserId::from(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_distinct_ids() {
        let generator = UuidV4Generator::new();
        let ids: HashSet<UserId> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generates_v4_uuids() {
        let id = UuidV4Generator::new().generate();
        let uuid = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }
}
