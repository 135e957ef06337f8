use std::collections::HashSet;

use structopt::StructOpt;

use sharded_wallet_generator_lib::{
    GenerationOrchestrator, GenerationRequest, HttpShardResolver, ProcessWalletMinter,
    RetryPolicy, WalletGeneratorConfig,
};

#[derive(Debug, StructOpt, Clone)]
#[structopt(
    name = "sharded_wallet_generator",
    about = "Generates wallets for a sharded network, optionally pinned to specific shards."
)]
struct WalletGenOpts {
    /// Number of wallets to produce.
    #[structopt(long, default_value = "1")]
    count: u32,

    /// Accept only wallets belonging to this shard. Repeatable; omit to
    /// accept any shard.
    #[structopt(long = "shard", number_of_values = 1)]
    shards: Vec<u32>,

    /// Do not write the mnemonic recovery phrase next to the key file.
    #[structopt(long)]
    skip_mnemonic: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let opts = WalletGenOpts::from_args();
    let config = WalletGeneratorConfig::from_env();

    let allowed_shards: HashSet<u32> = opts.shards.iter().copied().collect();
    let request = GenerationRequest::new(opts.count, allowed_shards, opts.skip_mnemonic)?;

    let minter = ProcessWalletMinter::new(&config);
    let resolver = HttpShardResolver::new(reqwest::Client::new(), config.api_url.clone());
    let mut orchestrator = GenerationOrchestrator::new(
        minter,
        resolver,
        config.output_dir.clone(),
        RetryPolicy::default(),
    );

    let report = orchestrator.generate(&request).await?;

    for wallet in &report.wallets {
        println!(
            "-> Wallet {} (shard {}) saved to {}",
            wallet.public_key,
            wallet.shard,
            wallet.key_path.display()
        );
    }
    println!("-> {} wallet(s) created", report.wallets.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_wallet_any_shard() {
        let opts = WalletGenOpts::from_iter_safe(vec!["walletgen"]).unwrap();
        assert_eq!(opts.count, 1);
        assert!(opts.shards.is_empty());
        assert!(!opts.skip_mnemonic);
    }

    #[test]
    fn shard_flag_is_repeatable() {
        let opts =
            WalletGenOpts::from_iter_safe(vec!["walletgen", "--shard=1", "--shard=2"]).unwrap();
        assert_eq!(opts.shards, vec![1, 2]);
    }

    #[test]
    fn skip_mnemonic_flag_is_recognized() {
        let opts = WalletGenOpts::from_iter_safe(vec!["walletgen", "--skip-mnemonic"]).unwrap();
        assert!(opts.skip_mnemonic);
    }

    #[test]
    fn non_integer_count_is_rejected() {
        assert!(WalletGenOpts::from_iter_safe(vec!["walletgen", "--count=abc"]).is_err());
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(WalletGenOpts::from_iter_safe(vec!["walletgen", "--count=-3"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(WalletGenOpts::from_iter_safe(vec!["walletgen", "--bogus"]).is_err());
    }
}
