//! Bot setup form state, its validation schema and the step wizard around it.

pub mod form;
pub mod value_objects;
pub mod wizard;

pub use form::{BotSetupAction, BotSetupFormState, fields};
pub use value_objects::*;
pub use wizard::*;
