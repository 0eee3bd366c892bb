use axum::extract::{Path, State};
use axum::Json;
use pollux::Relationship;
use serde_json::{json, Value};

use crate::errors::{Error, Result};
use crate::store::{AddOutcome, FriendsStore, RemoveOutcome};

use super::payloads::RelationshipPayload;


pub async fn get_friends(
    State(store): State<FriendsStore>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<i64>>> {
    let friends = store
        .get_friends(user_id)
        .await
        .map_err(|e| Error::from_store(e, Error::ErrorWhileFetchingUserFriends))?;

    tracing::debug!(user_id, count = friends.len(), "fetched friends");
    Ok(Json(friends))
}

pub async fn add_friends(
    State(store): State<FriendsStore>,
    Json(payload): Json<RelationshipPayload>,
) -> Result<Json<Value>> {
    let relationship = Relationship::try_from(payload)?;

    let outcome = store
        .add_relationship(&relationship)
        .await
        .map_err(|e| Error::from_store(e, Error::ErrorWhileMakingRelation))?;

    let body = Json(json!({
        "result": {
            "success": true
        },
        "created": outcome == AddOutcome::Created,
    }));

    Ok(body)
}

pub async fn remove_friends(
    State(store): State<FriendsStore>,
    Json(payload): Json<RelationshipPayload>,
) -> Result<Json<Value>> {
    let relationship = Relationship::try_from(payload)?;

    let outcome = store
        .remove_relationship(&relationship)
        .await
        .map_err(|e| Error::from_store(e, Error::ErrorWhileRemovingRelation))?;

    let body = Json(json!({
        "result": {
            "success": true
        },
        "removed": outcome == RemoveOutcome::Removed,
    }));

    Ok(body)
}
