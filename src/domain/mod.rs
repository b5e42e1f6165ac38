pub mod action_card;
pub mod bot_setup;
pub mod chat;
pub mod configuration;
pub mod errors;
pub mod forms;
pub mod logging;
pub mod signup;
