//! Identity and portfolio verification of a new account.

mod controller;
mod kyc_step;

pub use controller::VerificationController;
pub use kyc_step::KycStep;

pub(crate) const VERIFICATION_ALERT_TITLE: &str = "Verification";
