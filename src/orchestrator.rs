// Built-in deps
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
// External uses
use tracing::{debug, info};
// Local uses
use crate::candidate::{AcceptedWallet, Candidate};
use crate::error::WalletGenError;
use crate::minter::WalletMinter;
use crate::resolver::ShardResolver;

/// Immutable description of one generation run, built once from CLI input.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    count: u32,
    allowed_shards: HashSet<u32>,
    skip_mnemonic: bool,
}

impl GenerationRequest {
    pub fn new(
        count: u32,
        allowed_shards: HashSet<u32>,
        skip_mnemonic: bool,
    ) -> Result<Self, WalletGenError> {
        if count == 0 {
            return Err(WalletGenError::validation(
                "wallet count must be a positive integer",
            ));
        }
        Ok(Self {
            count,
            allowed_shards,
            skip_mnemonic,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn skip_mnemonic(&self) -> bool {
        self.skip_mnemonic
    }

    /// Empty allowed set means no restriction.
    pub fn allows(&self, shard: u32) -> bool {
        self.allowed_shards.is_empty() || self.allowed_shards.contains(&shard)
    }

    fn allowed_shards_sorted(&self) -> Vec<u32> {
        let mut shards: Vec<u32> = self.allowed_shards.iter().copied().collect();
        shards.sort_unstable();
        shards
    }
}

/// How long to keep rejecting candidates before giving up.
///
/// The default is unbounded with no backoff: the minter is assumed uniformly
/// likely to eventually land in an allowed shard, so the production path has
/// no give-up threshold. Bounded policies exist so tests can drive
/// deterministic mock sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: Option<u32>,
    pub backoff: Option<Duration>,
}

impl RetryPolicy {
    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff: None,
        }
    }
}

/// Outcome of a fully successful run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub wallets: Vec<AcceptedWallet>,
}

/// Drives the mint / resolve / filter / persist loop.
///
/// Strictly sequential: one candidate at a time, every external call awaited
/// to completion before the next. Any minter or resolver error aborts the
/// whole run; wallets persisted before the abort are kept.
pub struct GenerationOrchestrator<M, R> {
    minter: M,
    resolver: R,
    output_dir: PathBuf,
    retry: RetryPolicy,
    candidate_seq: u64,
}

impl<M: WalletMinter, R: ShardResolver> GenerationOrchestrator<M, R> {
    pub fn new(minter: M, resolver: R, output_dir: PathBuf, retry: RetryPolicy) -> Self {
        Self {
            minter,
            resolver,
            output_dir,
            retry,
            candidate_seq: 0,
        }
    }

    pub async fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<GenerationReport, WalletGenError> {
        let mut report = GenerationReport::default();
        for index in 0..request.count() {
            let wallet = self.generate_one(request).await?;
            info!(
                "wallet {}/{} accepted in shard {}: {}",
                index + 1,
                request.count(),
                wallet.shard,
                wallet.public_key
            );
            report.wallets.push(wallet);
        }
        Ok(report)
    }

    async fn generate_one(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<AcceptedWallet, WalletGenError> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            self.candidate_seq += 1;
            let candidate = Candidate::new(&self.output_dir, self.candidate_seq);

            let minted = self.minter.mint(candidate.path()).await?;
            let shard = self.resolver.resolve(&minted.public_key).await?;

            if request.allows(shard) {
                let mnemonic = if request.skip_mnemonic() {
                    None
                } else {
                    Some(minted.mnemonic.as_str())
                };
                return candidate.accept(shard, &minted.public_key, mnemonic);
            }

            debug!(
                "candidate {} belongs to shard {}, discarding",
                minted.public_key, shard
            );
            drop(candidate);

            if let Some(max_attempts) = self.retry.max_attempts {
                if attempts >= max_attempts {
                    return Err(WalletGenError::AttemptsExhausted {
                        shards: request.allowed_shards_sorted(),
                        attempts,
                    });
                }
            }
            if let Some(backoff) = self.retry.backoff {
                tokio::time::sleep(backoff).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_fails_validation() {
        let err = GenerationRequest::new(0, HashSet::new(), false).unwrap_err();
        assert!(matches!(err, WalletGenError::Validation(_)));
    }

    #[test]
    fn empty_allowed_set_accepts_any_shard() {
        let request = GenerationRequest::new(1, HashSet::new(), false).unwrap();
        assert!(request.allows(0));
        assert!(request.allows(2));
    }

    #[test]
    fn non_empty_allowed_set_is_a_membership_test() {
        let shards: HashSet<u32> = vec![1, 2].into_iter().collect();
        let request = GenerationRequest::new(1, shards, false).unwrap();
        assert!(request.allows(1));
        assert!(request.allows(2));
        assert!(!request.allows(0));
    }
}
