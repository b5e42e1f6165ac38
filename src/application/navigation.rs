use crate::domain::configuration::BotConfiguration;

/// Top-level views the root component switches between.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Setup wizard, optionally pre-filled from an assistant hand-off.
    Setup {
        initial: Option<BotConfiguration>,
        edit_mode: bool,
    },
    Signup,
    /// `just_registered` is set only by the post-signup redirect.
    Login { just_registered: bool },
}

impl Route {
    pub fn setup_with(configuration: BotConfiguration, edit_mode: bool) -> Self {
        Route::Setup {
            initial: Some(configuration),
            edit_mode,
        }
    }

    /// The login view reached from a link rather than a fresh signup.
    pub fn login() -> Self {
        Route::Login { just_registered: false }
    }

    pub fn blank_setup() -> Self {
        Route::Setup {
            initial: None,
            edit_mode: false,
        }
    }
}

/// Side effects the services ask the shell to perform.
pub trait Navigator {
    fn navigate(&self, route: Route);
    fn set_chat_open(&self, open: bool);
}

/// A configuration the caller wants confirmed in the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRequest {
    pub configuration: BotConfiguration,
    pub edit_mode: bool,
}
