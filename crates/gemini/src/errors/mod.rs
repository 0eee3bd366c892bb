use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pollux::ValidationError;
use serde::Serialize;
use serde_json::json;

use crate::store::StoreError;

pub type Result<T> = core::result::Result<T, Error>;


#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
	InvalidRelationship { reason: String },
	InvalidUserIdsOrder { user1: i64, user2: i64 },
	ErrorWhileFetchingUserFriends,
	ErrorWhileMakingRelation,
	ErrorWhileRemovingRelation,
}

impl core::fmt::Display for Error {
	fn fmt(
		&self,
		fmt: &mut core::fmt::Formatter,
	) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
	fn from(err: ValidationError) -> Self {
		Self::InvalidRelationship { reason: err.to_string() }
	}
}

impl Error {
	/// Maps a store failure onto the API error for the operation that hit it.
	pub fn from_store(err: StoreError, on_database_error: Error) -> Self {
		match err {
			StoreError::InvalidOrder { user1, user2 } => Self::InvalidUserIdsOrder { user1, user2 },
			StoreError::Database(db_err) => {
				tracing::error!(error = %db_err, kind = on_database_error.as_ref(), "database failure");
				on_database_error
			}
		}
	}

	pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
		match self {
			// Validation Error
			Self::InvalidRelationship { .. } => {
				(StatusCode::UNPROCESSABLE_ENTITY, ClientError::INVALID_RELATIONSHIP)
			}

			// -- Fallback.
			Self::InvalidUserIdsOrder { .. }
			| Self::ErrorWhileFetchingUserFriends
			| Self::ErrorWhileMakingRelation
			| Self::ErrorWhileRemovingRelation => (
				StatusCode::INTERNAL_SERVER_ERROR,
				ClientError::SERVICE_ERROR,
			),
		}
	}

	fn details(&self) -> String {
		match self {
			Self::InvalidRelationship { reason } => reason.clone(),
			_ => "Something went wrong. Please try again later.".to_string(),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let (status_code, client_error) = self.client_status_and_error();

		if status_code.is_server_error() {
			tracing::error!(error = %self, code = client_error.as_ref(), "request failed");
		} else {
			tracing::warn!(error = %self, code = client_error.as_ref(), "request rejected");
		}

		let body = Json(json!({
			"result": {
				"success": false
			},
			"error_message": client_error.as_ref(),
			"details": self.details(),
		}));

		let mut response = (status_code, body).into_response();
		response.extensions_mut().insert(self);

		response
	}
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
	INVALID_RELATIONSHIP,
	SERVICE_ERROR,
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_errors_are_unprocessable() {
		let err: Error = ValidationError::SelfFriendship(4).into();
		let (status, client_error) = err.client_status_and_error();

		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(client_error.as_ref(), "INVALID_RELATIONSHIP");
	}

	#[test]
	fn store_order_violation_is_a_server_error() {
		let err = Error::from_store(
			StoreError::InvalidOrder { user1: 0, user2: 1 },
			Error::ErrorWhileMakingRelation,
		);

		assert!(matches!(err, Error::InvalidUserIdsOrder { user1: 0, user2: 1 }));
		assert_eq!(err.client_status_and_error().0, StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn database_errors_map_to_the_operation_error() {
		let err = Error::from_store(
			StoreError::Database(sea_orm::DbErr::Custom("boom".to_string())),
			Error::ErrorWhileFetchingUserFriends,
		);

		assert!(matches!(err, Error::ErrorWhileFetchingUserFriends));
		assert_eq!(err.client_status_and_error().1.as_ref(), "SERVICE_ERROR");
	}
}
