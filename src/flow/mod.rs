//! Form submission flow.
//!
//! A screen owns a [`FormState`] and drives it through
//! `Idle -> Validating -> Invalid | Valid -> Submitting -> Success | Failure`.
//! Validation runs on every field change and on every submit; only a submit
//! whose own validation pass found nothing reaches the network.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use gobarber_forms::flow::{self, Navigator, Notifier, SubmitOutcome, Toast};
//! use gobarber_forms::{forms, ApiError, NewUser, UserDirectory};
//!
//! struct Users;
//!
//! #[async_trait]
//! impl UserDirectory for Users {
//!     async fn create_user(&self, _user: &NewUser) -> Result<(), ApiError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Toasts;
//!
//! impl Notifier for Toasts {
//!     fn notify(&self, toast: Toast) {
//!         println!("{}", toast.title);
//!     }
//! }
//!
//! struct Router;
//!
//! impl Navigator for Router {
//!     fn navigate(&self, route: &str) {
//!         println!("-> {route}");
//!     }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let schema = Arc::new(forms::sign_up());
//! let mut screen = flow::sign_up_screen(schema, Users, Toasts, Router);
//!
//! screen.change("name", "Ana");
//! screen.change("email", "ana@gobarber.com");
//! assert_eq!(screen.submit().await, SubmitOutcome::Invalid);
//!
//! screen.change("password", "123456");
//! assert_eq!(screen.submit().await, SubmitOutcome::Submitted);
//! # });
//! ```

mod screen;
mod state;
mod submission;
mod ui;

pub use screen::{sign_in_screen, sign_up_screen, FormScreen, ScreenConfig, SubmitOutcome};
pub use state::{FormPhase, FormState};
pub use submission::{SessionSlot, SessionStore, SignInSubmission, SignUpSubmission, Submission};
pub use ui::{Navigator, Notifier, Toast, ToastKind};
