use axum::extract::FromRef;

use crate::store::FriendsStore;


#[derive(Clone)]
pub struct AppDBState {
    pub store: FriendsStore,
}

impl AppDBState {
    pub fn new(store: FriendsStore) -> Self {
        Self { store }
    }
}

// Each request extracts its own handle; it is released when the handler returns.
impl FromRef<AppDBState> for FriendsStore {
    fn from_ref(state: &AppDBState) -> Self {
        state.store.clone()
    }
}
