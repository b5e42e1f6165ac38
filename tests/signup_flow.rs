use std::cell::{Cell, RefCell};

use bot_setup_web::application::{Navigator, RegistrationGateway, Route, SignupOutcome, SignupService};
use bot_setup_web::domain::errors::{GatewayError, GatewayResult};
use bot_setup_web::domain::signup::{
    GENERIC_SIGNUP_ERROR, PASSWORD_MISMATCH, RegistrationRequest, SignupField, SignupFormData,
};
use futures::executor::block_on;
use insta::assert_json_snapshot;
use wasm_bindgen_test::*;

struct FakeRegistry {
    calls: Cell<usize>,
    last: RefCell<Option<RegistrationRequest>>,
    response: fn() -> GatewayResult<()>,
}

impl FakeRegistry {
    fn answering(response: fn() -> GatewayResult<()>) -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
            response,
        }
    }
}

impl RegistrationGateway for &FakeRegistry {
    async fn register(&self, request: &RegistrationRequest) -> GatewayResult<()> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(request.clone());
        (self.response)()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }

    fn set_chat_open(&self, _open: bool) {}
}

fn submit(registry: &FakeRegistry, form: &SignupFormData) -> (SignupOutcome, Vec<Route>) {
    let navigator = RecordingNavigator::default();
    let outcome = block_on(SignupService::new(registry).submit(form, &navigator));
    (outcome, navigator.routes.into_inner())
}

#[wasm_bindgen_test]
fn short_password_blocks_the_request() {
    let registry = FakeRegistry::answering(|| Ok(()));
    let form = SignupFormData::new("trader@example.com", "abcd123", "abcd123");

    let (outcome, routes) = submit(&registry, &form);

    let SignupOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
    assert_eq!(registry.calls.get(), 0);
    assert!(routes.is_empty());
}

#[wasm_bindgen_test]
fn mismatched_confirmation_blocks_the_request() {
    let registry = FakeRegistry::answering(|| Ok(()));
    let form = SignupFormData::new("trader@example.com", "abcdefgh", "abcdefg1");

    let (outcome, _) = submit(&registry, &form);

    let SignupOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("password2"), Some(PASSWORD_MISMATCH));
    assert_eq!(errors.len(), 1);
    assert_eq!(registry.calls.get(), 0);
}

#[wasm_bindgen_test]
fn successful_registration_redirects_to_login() {
    let registry = FakeRegistry::answering(|| Ok(()));
    let mut form = SignupFormData::default();
    form.set(SignupField::Email, " new@bots.io ".into());
    form.set(SignupField::Password, "correct horse".into());
    form.set(SignupField::Password2, "correct horse".into());

    let (outcome, routes) = submit(&registry, &form);

    assert_eq!(outcome, SignupOutcome::Registered);
    assert_eq!(routes, vec![Route::Login { just_registered: true }]);
    assert_eq!(registry.calls.get(), 1);
    assert_json_snapshot!(registry.last.borrow().as_ref().unwrap(), @r#"
    {
      "username": "new@bots.io",
      "password": "correct horse",
      "password2": "correct horse",
      "email": "new@bots.io",
      "first_name": "",
      "last_name": ""
    }
    "#);
}

#[wasm_bindgen_test]
fn server_message_is_passed_through() {
    let registry = FakeRegistry::answering(|| {
        Err(GatewayError::Status {
            code: 400,
            message: Some("user with this email already exists.".into()),
        })
    });
    let form = SignupFormData::new("taken@example.com", "abcdefgh", "abcdefgh");

    let (outcome, routes) = submit(&registry, &form);

    assert_eq!(outcome, SignupOutcome::Rejected("user with this email already exists.".into()));
    assert!(routes.is_empty());
}

#[wasm_bindgen_test]
fn unexplained_failure_uses_the_generic_message() {
    let registry = FakeRegistry::answering(|| Err(GatewayError::Request("offline".into())));
    let form = SignupFormData::new("a@example.com", "abcdefgh", "abcdefgh");

    let (outcome, _) = submit(&registry, &form);

    assert_eq!(outcome, SignupOutcome::Rejected(GENERIC_SIGNUP_ERROR.into()));
}
