//! Action cards: one conditional trade rule each, edited through typed updates.

pub mod editor;
pub mod entities;
pub mod validation;

pub use editor::*;
pub use entities::*;
pub use validation::validate_card;
