//! Pure Utilities
//!
//! Stateless helpers used by the API layer and duplicated for display in
//! the UI crate. Failure is a fallback sentinel (empty string, `None`, `0`),
//! never an error.

pub mod address;
pub mod cycle;
pub mod text;

pub use address::{etherscan_url, invalidate_zero_address, shorten_address, ZERO_ADDRESS};
pub use cycle::date_ranges_of_cycles;
pub use text::{first_paragraph, proposal_number};
