use ethers::providers::{Http, Provider};
use ethers::types::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Transaction not found")]
    TxNotFound,

    #[error("Transaction failed")]
    TxFailed,

    #[error("No USDC transfer found in transaction")]
    NoTransferFound,

    #[error("Wrong recipient. Expected {expected:?}, got {actual:?}")]
    WrongRecipient { expected: Address, actual: Address },

    #[error("Insufficient amount. Expected {expected} USDC, got {actual} USDC")]
    InsufficientAmount { expected: String, actual: String },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("RPC error: {0}")]
    RpcError(#[from] ethers::providers::ProviderError),

    #[error("Contract error: {0}")]
    ContractError(#[from] ethers::contract::ContractError<Provider<Http>>),
}
