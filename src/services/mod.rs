pub mod verifier;

pub use verifier::PaymentVerifier;
