//! On-chain USDC payment verification for the agent marketplace.
//!
//! Verifies that a transaction hash corresponds to a successful ERC-20
//! Transfer of the chain's USDC contract, optionally checking recipient
//! and a minimum amount, and exposes a `balanceOf` lookup.

pub mod config;
pub mod contracts;
pub mod error;
pub mod models;
pub mod services;
pub mod units;

pub use config::{ChainConfig, ChainRegistry, USDC_DECIMALS};
pub use error::VerifierError;
pub use models::{PaymentVerification, TokenBalance};
pub use services::PaymentVerifier;
