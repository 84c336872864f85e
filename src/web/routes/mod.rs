pub mod ai_routes;
pub mod group_routes;
pub mod idea_routes;
pub mod settings_routes;
