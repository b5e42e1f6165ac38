pub mod action_card_editor;
pub mod bot_setup_form;
pub mod chat_assistant;
pub mod footer;
pub mod hero;
pub mod signup_form;

pub use action_card_editor::ActionCardEditor;
pub use bot_setup_form::BotSetupWizardView;
pub use chat_assistant::ChatAssistant;
pub use footer::Footer;
pub use hero::Hero;
pub use signup_form::SignupForm;
