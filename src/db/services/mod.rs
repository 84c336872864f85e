//! High-level data access API over the SeaORM entities. HTTP handlers go
//! through these functions and never touch query building directly. Every
//! read and write is scoped by the owning user's id.

pub mod group_service;
pub mod idea_service;
pub mod settings_service;
pub mod user_service;

pub use group_service::*;
pub use idea_service::*;
pub use settings_service::*;
pub use user_service::*;
