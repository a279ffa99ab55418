// src/components/mod.rs
mod card;
mod controls;
mod details;
mod instructions;
mod overlay;
mod toast;

pub use card::ChurchCard;
pub use controls::SwipeControls;
pub use details::ChurchDetails;
pub use instructions::SwipeInstructions;
pub use overlay::SwipeOverlay;
pub use toast::Toast;
