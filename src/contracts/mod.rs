pub mod erc20;

pub use erc20::{address_from_word, transfer_event_topic, Erc20};
