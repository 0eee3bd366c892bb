//! Persistence for friendship edges.
//!
//! Every edge is a single row of the `friends` table keyed by the canonical
//! pair `(user1, user2)` with `user1 > user2`. Reads take the union of both
//! column positions so the relationship behaves as undirected.

use std::collections::BTreeSet;
use std::time::Duration;

use migration::{create_all, drop_all, SchemaManager};
use pollux::models::friends::{self, Entity as Friends};
use pollux::Relationship;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Set,
};
use thiserror::Error;

use crate::conf::config_types::DatabaseConfiguration;


#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user1 must be greater than user2, got ({user1}, {user2})")]
    InvalidOrder { user1: i64, user2: i64 },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    AlreadyFriends,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Handle on the friendship table.
///
/// Cloning is cheap and shares the underlying pool. `disconnect` consumes the
/// handle it is called on and closes the pool for every clone.
#[derive(Clone, Debug)]
pub struct FriendsStore {
    conn: DatabaseConnection,
}

impl FriendsStore {
    pub async fn connect(config: &DatabaseConfiguration) -> Result<Self, StoreError> {
        let mut opts = ConnectOptions::new(config.url.clone());
        opts.sqlx_logging(config.sqlx_logging)
            .acquire_timeout(Duration::from_secs(8));
        if let Some(max_connections) = config.max_connections {
            opts.max_connections(max_connections);
        }

        let conn = Database::connect(opts).await?;
        tracing::info!(backend = ?conn.get_database_backend(), "connected to friends database");

        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn disconnect(self) -> Result<(), StoreError> {
        self.conn.close().await?;
        tracing::info!("disconnected from friends database");
        Ok(())
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        create_all(&SchemaManager::new(&self.conn)).await?;
        tracing::debug!("friends schema created");
        Ok(())
    }

    pub async fn drop_schema(&self) -> Result<(), StoreError> {
        drop_all(&SchemaManager::new(&self.conn)).await?;
        tracing::debug!("friends schema dropped");
        Ok(())
    }

    /// Every user sharing an edge with `user_id`, ascending and without duplicates.
    pub async fn get_friends(&self, user_id: i64) -> Result<Vec<i64>, StoreError> {
        let edges = Friends::find_by_user_id(user_id).all(&self.conn).await?;

        let friends: BTreeSet<i64> = edges
            .iter()
            .filter_map(|edge| edge.friend_of(user_id))
            .collect();

        Ok(friends.into_iter().collect())
    }

    /// Inserts the edge `(user1, user2)`; an existing edge is left untouched.
    pub async fn add_friends(&self, user1: i64, user2: i64) -> Result<AddOutcome, StoreError> {
        check_ids_order(user1, user2)?;

        let edge = friends::ActiveModel {
            user1: Set(user1),
            user2: Set(user2),
        };

        let inserted = Friends::insert(edge)
            .on_conflict(
                OnConflict::columns([friends::Column::User1, friends::Column::User2])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        // ON CONFLICT DO NOTHING reports a duplicate as zero affected rows
        let outcome = if inserted == 0 {
            AddOutcome::AlreadyFriends
        } else {
            AddOutcome::Created
        };

        tracing::debug!(user1, user2, ?outcome, "add friends");
        Ok(outcome)
    }

    /// Deletes the edge `(user1, user2)`; a missing edge is not an error.
    pub async fn remove_friends(&self, user1: i64, user2: i64) -> Result<RemoveOutcome, StoreError> {
        check_ids_order(user1, user2)?;

        let deleted = Friends::delete_by_pair(user1, user2).exec(&self.conn).await?;

        let outcome = if deleted.rows_affected == 0 {
            RemoveOutcome::NotFound
        } else {
            RemoveOutcome::Removed
        };

        tracing::debug!(user1, user2, ?outcome, "remove friends");
        Ok(outcome)
    }

    pub async fn add_relationship(&self, relationship: &Relationship) -> Result<AddOutcome, StoreError> {
        self.add_friends(relationship.user1(), relationship.user2()).await
    }

    pub async fn remove_relationship(
        &self,
        relationship: &Relationship,
    ) -> Result<RemoveOutcome, StoreError> {
        self.remove_friends(relationship.user1(), relationship.user2()).await
    }
}

fn check_ids_order(user1: i64, user2: i64) -> Result<(), StoreError> {
    if user1 <= user2 {
        return Err(StoreError::InvalidOrder { user1, user2 });
    }
    Ok(())
}
