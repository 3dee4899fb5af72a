//! Gateway API client

mod client;

pub use client::*;
