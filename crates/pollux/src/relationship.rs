use serde::Serialize;
use thiserror::Error;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user id must be a non-negative value, got {0}")]
    NegativeUserId(i64),

    #[error("user {0} cannot be friends with themselves")]
    SelfFriendship(i64),
}

/// Canonical friendship pair.
///
/// The larger id always lands in `user1`, so `(a, b)` and `(b, a)` build the
/// same value and map onto the same row of the `friends` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Relationship {
    user1: i64,
    user2: i64,
}

impl Relationship {
    pub fn new(a: i64, b: i64) -> Result<Self, ValidationError> {
        if a < 0 {
            return Err(ValidationError::NegativeUserId(a));
        }
        if b < 0 {
            return Err(ValidationError::NegativeUserId(b));
        }
        if a == b {
            return Err(ValidationError::SelfFriendship(a));
        }

        let (user1, user2) = if a > b { (a, b) } else { (b, a) };
        Ok(Self { user1, user2 })
    }

    pub fn user1(&self) -> i64 {
        self.user1
    }

    pub fn user2(&self) -> i64 {
        self.user2
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user1_is_always_the_greater_id() {
        let forward = Relationship::new(1, 2).unwrap();
        let reversed = Relationship::new(2, 1).unwrap();

        assert_eq!(forward.user1(), 2);
        assert_eq!(forward.user2(), 1);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn canonical_order_holds_across_a_range_of_pairs() {
        for a in 0..20_i64 {
            for b in (0..20_i64).filter(|b| *b != a) {
                let rel = Relationship::new(a, b).unwrap();
                assert_eq!(rel.user1(), a.max(b));
                assert_eq!(rel.user2(), a.min(b));
                assert_eq!(rel, Relationship::new(b, a).unwrap());
            }
        }
    }

    #[test]
    fn zero_is_a_valid_user_id() {
        let rel = Relationship::new(0, 1).unwrap();
        assert_eq!((rel.user1(), rel.user2()), (1, 0));
    }

    #[test]
    fn negative_id_is_rejected() {
        assert_eq!(Relationship::new(-1, 1), Err(ValidationError::NegativeUserId(-1)));
        assert_eq!(Relationship::new(1, -1), Err(ValidationError::NegativeUserId(-1)));
        assert_eq!(Relationship::new(-3, -2), Err(ValidationError::NegativeUserId(-3)));
    }

    #[test]
    fn same_ids_are_rejected() {
        assert_eq!(Relationship::new(5, 5), Err(ValidationError::SelfFriendship(5)));
    }

    #[test]
    fn serializes_in_canonical_order() {
        let rel = Relationship::new(3, 8).unwrap();
        let json = serde_json::to_value(rel).unwrap();

        assert_eq!(json, serde_json::json!({"user1": 8, "user2": 3}));
    }
}
