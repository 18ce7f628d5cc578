//! Sign in, sign up, password reset and sign out.

mod forgot_password;
mod sign_in;
mod sign_out;
mod sign_up;

pub use forgot_password::ForgotPassword;
pub use sign_in::SignIn;
pub use sign_out::SignOut;
pub use sign_up::SignUp;

use at_core::ports::{ApiError, StorageError};
use at_core::user::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}
