pub mod client;
pub mod verify;

pub use client::VisionClient;
pub use verify::{verify_title, VerificationOutcome};
