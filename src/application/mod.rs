pub mod chat_service;
pub mod navigation;
pub mod signup_service;

pub use chat_service::*;
pub use navigation::*;
pub use signup_service::*;
