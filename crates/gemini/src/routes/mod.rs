pub mod friends_routes;
