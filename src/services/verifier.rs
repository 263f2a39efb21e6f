use crate::config::{ChainConfig, ChainRegistry, USDC_DECIMALS};
use crate::contracts::{address_from_word, transfer_event_topic, Erc20};
use crate::error::VerifierError;
use crate::models::{PaymentVerification, TokenBalance};
use crate::units::{format_units, parse_units};
use anyhow::Result;
use ethers::{
    prelude::*,
    providers::{Http, Provider, ProviderError},
    types::{Address, H256, U256},
};
use std::sync::Arc;

/// Verifies USDC payments against the chain's read endpoint.
///
/// Stateless apart from the immutable chain registry; every call builds
/// its own provider, so concurrent verifications never interfere.
#[derive(Clone)]
pub struct PaymentVerifier {
    chains: ChainRegistry,
}

impl PaymentVerifier {
    pub fn new(chains: ChainRegistry) -> Self {
        Self { chains }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ChainRegistry::from_env()?))
    }

    /// Checks that `tx_hash` is a successful USDC transfer on `chain_id`,
    /// optionally to `expected_to` and of at least `expected_amount`
    /// (human decimal string, floor check to tolerate over-payment).
    ///
    /// Never fails outright: every error is folded into the returned
    /// record as `valid = false` plus an `error` message, with whatever
    /// fields were already determined left populated.
    pub async fn verify_payment(
        &self,
        tx_hash: H256,
        chain_id: u64,
        expected_to: Option<Address>,
        expected_amount: Option<&str>,
    ) -> PaymentVerification {
        let mut record =
            PaymentVerification::unverified(tx_hash, chain_id, self.chains.chain_name(chain_id));

        let Some(chain) = self.chains.get(chain_id) else {
            record.error = Some(VerifierError::UnsupportedChain(chain_id).to_string());
            return record;
        };

        match self
            .check_transfer(chain, tx_hash, expected_to, expected_amount, &mut record)
            .await
        {
            Ok(()) => {
                record.valid = true;
                tracing::info!(
                    "Payment verified: {} USDC from {} on {} (tx: {:?})",
                    record.amount,
                    record.from,
                    record.chain_name,
                    tx_hash
                );
            }
            Err(e) => {
                tracing::debug!("Payment verification failed for {:?}: {}", tx_hash, e);
                record.error = Some(e.to_string());
            }
        }

        record
    }

    async fn check_transfer(
        &self,
        chain: &ChainConfig,
        tx_hash: H256,
        expected_to: Option<Address>,
        expected_amount: Option<&str>,
        record: &mut PaymentVerification,
    ) -> Result<(), VerifierError> {
        let provider = self.provider(chain)?;

        let receipt = provider
            .get_transaction_receipt(tx_hash)
            .await?
            .ok_or(VerifierError::TxNotFound)?;

        record.from = format!("{:?}", receipt.from);
        record.block_number = receipt.block_number.unwrap_or_default();

        if receipt.status != Some(1.into()) {
            return Err(VerifierError::TxFailed);
        }

        let topic = transfer_event_topic();
        let log = receipt
            .logs
            .iter()
            .find(|log| {
                log.address == chain.usdc
                    && log.topics.first() == Some(&topic)
                    && log.topics.len() >= 3
            })
            .ok_or(VerifierError::NoTransferFound)?;

        let from = address_from_word(&log.topics[1]);
        let to = address_from_word(&log.topics[2]);
        // Transfer data is a single 32-byte word; tolerate short payloads.
        let amount_raw = U256::from_big_endian(&log.data[..log.data.len().min(32)]);

        record.from = format!("{:?}", from);
        record.to = format!("{:?}", to);
        record.amount_raw = amount_raw;
        record.amount = format_units(amount_raw, USDC_DECIMALS);

        if let Some(expected) = expected_to {
            if to != expected {
                return Err(VerifierError::WrongRecipient {
                    expected,
                    actual: to,
                });
            }
        }

        if let Some(expected) = expected_amount {
            let expected_raw = parse_units(expected, USDC_DECIMALS)?;
            if amount_raw < expected_raw {
                return Err(VerifierError::InsufficientAmount {
                    expected: expected.to_string(),
                    actual: record.amount.clone(),
                });
            }
        }

        // Timestamp lookup is best-effort; a dead block endpoint must not
        // invalidate the payment.
        match provider.get_block(record.block_number).await {
            Ok(Some(block)) => record.timestamp = Some(block.timestamp.as_u64()),
            Ok(None) => {
                tracing::debug!("Block {} not found for timestamp", record.block_number)
            }
            Err(e) => tracing::debug!("Timestamp lookup failed: {}", e),
        }

        Ok(())
    }

    /// Current USDC balance of `address` on `chain_id`, raw plus the
    /// scale-6 decimal rendering.
    pub async fn token_balance(
        &self,
        address: Address,
        chain_id: u64,
    ) -> Result<TokenBalance, VerifierError> {
        let chain = self
            .chains
            .get(chain_id)
            .ok_or(VerifierError::UnsupportedChain(chain_id))?;

        let provider = Arc::new(self.provider(chain)?);
        let usdc = Erc20::new(chain.usdc, provider);
        let balance_raw = usdc.balance_of(address).call().await?;

        Ok(TokenBalance {
            balance: format_units(balance_raw, USDC_DECIMALS),
            balance_raw,
        })
    }

    fn provider(&self, chain: &ChainConfig) -> Result<Provider<Http>, VerifierError> {
        Provider::<Http>::try_from(chain.rpc_url.as_str())
            .map_err(|e| VerifierError::RpcError(ProviderError::CustomError(e.to_string())))
    }
}
