pub mod friends_controller;
pub mod health_controller;
pub mod payloads;
