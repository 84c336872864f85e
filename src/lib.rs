pub mod ai;
pub mod db;
pub mod filter;
pub mod server;
pub mod services;
pub mod web;
