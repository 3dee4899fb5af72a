//! API route handlers

pub mod auto;
pub mod discord;
pub mod health;
pub mod session;
pub mod spaces;
