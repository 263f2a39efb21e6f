use anyhow::{bail, Context, Result};
use ethers::types::Address;
use std::collections::HashMap;
use std::str::FromStr;

/// USDC uses 6 decimal places on every supported chain.
pub const USDC_DECIMALS: u32 = 6;

/// USDC contract on Base mainnet (chain id 8453).
pub const BASE_USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
/// USDC contract on Ethereum mainnet (chain id 1).
pub const MAINNET_USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

const BASE_RPC_DEFAULT: &str = "https://mainnet.base.org";
const MAINNET_RPC_DEFAULT: &str = "https://eth.llamarpc.com";

/// A single supported chain: display name, USDC contract, read endpoint.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: String,
    pub usdc: Address,
    pub rpc_url: String,
}

/// Immutable chain-id -> ChainConfig table, built once at startup.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: HashMap<u64, ChainConfig>,
}

impl ChainRegistry {
    pub fn new(chains: impl IntoIterator<Item = ChainConfig>) -> Self {
        Self {
            chains: chains.into_iter().map(|c| (c.chain_id, c)).collect(),
        }
    }

    /// Builds the production table: Base (8453) and Ethereum mainnet (1),
    /// with RPC endpoints overridable via `BASE_RPC_URL` / `ETH_RPC_URL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_rpc =
            std::env::var("BASE_RPC_URL").unwrap_or_else(|_| BASE_RPC_DEFAULT.to_string());
        let eth_rpc =
            std::env::var("ETH_RPC_URL").unwrap_or_else(|_| MAINNET_RPC_DEFAULT.to_string());

        let registry = Self::new([
            ChainConfig {
                chain_id: 8453,
                name: "Base".to_string(),
                usdc: Self::parse_address(BASE_USDC)?,
                rpc_url: base_rpc,
            },
            ChainConfig {
                chain_id: 1,
                name: "Ethereum".to_string(),
                usdc: Self::parse_address(MAINNET_USDC)?,
                rpc_url: eth_rpc,
            },
        ]);

        registry.validate()?;
        Ok(registry)
    }

    pub fn get(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.get(&chain_id)
    }

    /// Display name for a chain id, `"Unknown"` when unsupported.
    pub fn chain_name(&self, chain_id: u64) -> String {
        self.chains
            .get(&chain_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    fn parse_address(addr_str: &str) -> Result<Address> {
        Address::from_str(addr_str).with_context(|| format!("Invalid address: {}", addr_str))
    }

    fn validate(&self) -> Result<()> {
        for chain in self.chains.values() {
            if !chain.rpc_url.starts_with("http") {
                bail!("RPC URL for chain {} must be HTTP(S)", chain.chain_id);
            }
        }

        tracing::info!("Chain registry loaded with {} chains", self.chains.len());
        Ok(())
    }
}
