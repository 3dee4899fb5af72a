//! UI Components
//!
//! Reusable Leptos components.

pub mod loading;
pub mod nav;
pub mod space_card;
pub mod toast;
pub mod wallet;

pub use nav::Nav;
pub use space_card::SpaceCard;
pub use toast::Toast;
pub use wallet::ConnectButton;
