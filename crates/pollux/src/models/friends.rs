use sea_orm::entity::prelude::*;
use sea_orm::{Condition, DeleteMany, Select};
use serde::{Deserialize, Serialize};


/// One undirected friendship edge, stored with the larger id in `user1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "friends")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user1: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user2: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The partner of `user_id` on this edge, if `user_id` is part of it.
    pub fn friend_of(&self, user_id: i64) -> Option<i64> {
        if self.user1 == user_id {
            Some(self.user2)
        } else if self.user2 == user_id {
            Some(self.user1)
        } else {
            None
        }
    }
}

impl Entity {
    pub fn find_by_user_id(user_id: i64) -> Select<Entity> {
        Self::find().filter(
            Condition::any()
                .add(Column::User1.eq(user_id))
                .add(Column::User2.eq(user_id)),
        )
    }

    pub fn delete_by_pair(user1: i64, user2: i64) -> DeleteMany<Entity> {
        Self::delete_many().filter(Column::User1.eq(user1)).filter(Column::User2.eq(user2))
    }
}
