pub mod entities;
pub mod enums;
pub mod models;
pub mod services;
