//! Wallet generator for a sharded network.
//!
//! Mints candidate wallets through an external key generator, asks the
//! network's account-lookup service which shard each candidate landed in,
//! and keeps only the ones matching the caller's allowed-shard set. Accepted
//! wallets are persisted as `<shard>_<publicKey>.pem` (plus a `.txt`
//! mnemonic file unless suppressed); rejected candidates are removed before
//! the next attempt.

pub mod candidate;
pub mod config;
pub mod error;
pub mod minter;
pub mod mock;
pub mod orchestrator;
pub mod resolver;

pub use candidate::AcceptedWallet;
pub use config::WalletGeneratorConfig;
pub use error::WalletGenError;
pub use minter::{MintedWallet, ProcessWalletMinter, WalletMinter};
pub use orchestrator::{GenerationOrchestrator, GenerationReport, GenerationRequest, RetryPolicy};
pub use resolver::{HttpShardResolver, ShardResolver};
