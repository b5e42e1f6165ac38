use crate::domain::errors::GatewayResult;
use crate::domain::forms::FieldErrors;
use crate::domain::logging::LogComponent;
use crate::domain::signup::{GENERIC_SIGNUP_ERROR, RegistrationRequest, SignupFormData};
use crate::{log_info, log_warn};

use super::navigation::{Navigator, Route};

/// External account-creation endpoint.
#[allow(async_fn_in_trait)]
pub trait RegistrationGateway {
    async fn register(&self, request: &RegistrationRequest) -> GatewayResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// Blocked before any request was made.
    Invalid(FieldErrors),
    Registered,
    /// Display string for the form's error banner.
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct SignupService<R> {
    gateway: R,
}

impl<R: RegistrationGateway> SignupService<R> {
    pub fn new(gateway: R) -> Self {
        Self { gateway }
    }

    pub async fn submit(&self, form: &SignupFormData, navigator: &impl Navigator) -> SignupOutcome {
        if let Err(errors) = form.check().into_result() {
            log_info!(
                LogComponent::Application("SignupService"),
                "signup blocked by {} field error(s)",
                errors.len()
            );
            return SignupOutcome::Invalid(errors);
        }

        match self.gateway.register(&form.to_request()).await {
            Ok(()) => {
                log_info!(LogComponent::Application("SignupService"), "account created");
                navigator.navigate(Route::Login { just_registered: true });
                SignupOutcome::Registered
            }
            Err(error) => {
                log_warn!(LogComponent::Application("SignupService"), "registration rejected: {}", error);
                let message = error
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| GENERIC_SIGNUP_ERROR.to_string());
                SignupOutcome::Rejected(message)
            }
        }
    }
}
