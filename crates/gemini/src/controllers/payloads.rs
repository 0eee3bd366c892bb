use pollux::{Relationship, ValidationError};
use serde::{Deserialize, Serialize};


/// Body of `/add_friends/` and `/remove_friends/`; ids may arrive in any order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelationshipPayload {
    pub user1: i64,
    pub user2: i64,
}

impl TryFrom<RelationshipPayload> for Relationship {
    type Error = ValidationError;

    fn try_from(payload: RelationshipPayload) -> Result<Self, Self::Error> {
        Relationship::new(payload.user1, payload.user2)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_canonicalized_into_a_relationship() {
        let payload: RelationshipPayload =
            serde_json::from_str(r#"{"user1": 0, "user2": 1}"#).unwrap();
        let rel = Relationship::try_from(payload).unwrap();

        assert_eq!((rel.user1(), rel.user2()), (1, 0));
    }

    #[test]
    fn invalid_payloads_fail_validation() {
        let same = RelationshipPayload { user1: 2, user2: 2 };
        let negative = RelationshipPayload { user1: -2, user2: 2 };

        assert_eq!(Relationship::try_from(same), Err(ValidationError::SelfFriendship(2)));
        assert_eq!(Relationship::try_from(negative), Err(ValidationError::NegativeUserId(-2)));
    }
}
