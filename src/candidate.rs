// Built-in deps
use std::fs;
use std::path::{Path, PathBuf};
// Local uses
use crate::error::WalletGenError;

/// A wallet that passed the shard filter and was persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedWallet {
    pub public_key: String,
    pub shard: u32,
    pub key_path: PathBuf,
    pub mnemonic_path: Option<PathBuf>,
}

/// Transient on-disk key material for one not-yet-classified wallet.
///
/// Exactly one candidate exists per retry iteration. Dropping a candidate
/// that was not accepted removes its file, so every rejection and error
/// branch cleans up without explicit bookkeeping.
#[derive(Debug)]
pub struct Candidate {
    path: PathBuf,
    accepted: bool,
}

impl Candidate {
    /// Names the candidate from the caller-supplied sequence number and the
    /// process id rather than a fixed ambient filename.
    pub fn new(output_dir: &Path, sequence: u64) -> Self {
        let path = output_dir.join(format!(
            ".candidate-{}-{}.pem",
            std::process::id(),
            sequence
        ));
        Self {
            path,
            accepted: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the candidate into its permanent `<shard>_<publicKey>.pem`
    /// name and, when a mnemonic is supplied, writes the sibling `.txt`
    /// file holding the bare phrase.
    pub fn accept(
        mut self,
        shard: u32,
        public_key: &str,
        mnemonic: Option<&str>,
    ) -> Result<AcceptedWallet, WalletGenError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let key_path = dir.join(format!("{}_{}.pem", shard, public_key));
        fs::rename(&self.path, &key_path)?;
        self.accepted = true;

        let mnemonic_path = match mnemonic {
            Some(phrase) => {
                let path = dir.join(format!("{}_{}.txt", shard, public_key));
                fs::write(&path, phrase)?;
                Some(path)
            }
            None => None,
        };

        Ok(AcceptedWallet {
            public_key: public_key.to_string(),
            shard,
            key_path,
            mnemonic_path,
        })
    }
}

impl Drop for Candidate {
    fn drop(&mut self) {
        if !self.accepted {
            let _ = fs::remove_file(&self.path);
        }
    }
}
