//! Per-user account storage for the file share.
//!
//! Each provisioned user gets a directory `<root>/<username>/` holding a
//! single `hash.txt` with the bcrypt hash of their password. The download
//! service later reads that file to authenticate the user.

use crate::hash::{hash_password, verify_password};
use crate::validate;
use snafu::{ResultExt, Snafu};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the hash file inside each user directory.
const HASH_FILE_NAME: &str = "hash.txt";

/// Errors that can occur while provisioning an account.
#[derive(Debug, Snafu)]
pub enum Error {
    /// Username failed validation.
    #[snafu(display("Invalid username '{username}': {source}"))]
    InvalidUsername {
        source: validate::Error,
        username: String,
    },

    /// Password failed validation.
    #[snafu(display("Invalid password: {source}"))]
    InvalidPassword { source: validate::Error },

    /// Failed to create the user directory.
    #[snafu(display("Failed to create account directory '{}'", path.display()))]
    CreateDir {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to write the hash file.
    #[snafu(display("Failed to write hash file '{}'", path.display()))]
    WriteHash {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read the hash file back.
    #[snafu(display("Failed to read hash file '{}'", path.display()))]
    ReadHash {
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to hash the password.
    #[snafu(display("Failed to hash password"))]
    Hash { source: crate::hash::Error },

    /// Failed to verify the password.
    #[snafu(display("Failed to verify password"))]
    Verify { source: crate::hash::Error },
}

/// A successfully provisioned account, ready to be reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedAccount {
    /// The validated username.
    pub username: String,
    /// Path of the written hash file.
    pub hash_path: PathBuf,
    /// Login link for the download service.
    pub login_url: String,
}

/// Writes account credentials under a base directory and builds login links.
pub struct AccountStore {
    root: PathBuf,
    host: String,
}

impl AccountStore {
    /// Create a store rooted at `root` building links for `host`.
    ///
    /// `root` should be absolute so the reported hash path is absolute too;
    /// the store itself works with any path.
    pub fn new(root: impl Into<PathBuf>, host: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            host: host.into(),
        }
    }

    /// Base directory accounts are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Provision an account: validate, hash, and persist.
    ///
    /// Creates `<root>/<username>/` (including parents, idempotently) and
    /// writes the bcrypt hash to `hash.txt` inside it. Rerunning for the
    /// same username overwrites the previous hash. Nothing is written if
    /// validation or hashing fails.
    pub fn provision(&self, username: &str, password: &str) -> Result<ProvisionedAccount, Error> {
        validate::check_username(username).context(InvalidUsernameSnafu { username })?;
        validate::check_password(password).context(InvalidPasswordSnafu)?;

        let user_dir = self.root.join(username);
        fs::create_dir_all(&user_dir).context(CreateDirSnafu { path: &user_dir })?;

        let hash = hash_password(password).context(HashSnafu)?;

        let hash_path = user_dir.join(HASH_FILE_NAME);
        fs::write(&hash_path, hash.as_bytes()).context(WriteHashSnafu { path: &hash_path })?;
        log::debug!("wrote hash for '{}' to {}", username, hash_path.display());

        Ok(ProvisionedAccount {
            username: username.to_string(),
            hash_path,
            login_url: format!("https://{}/login.php?username={}", self.host, username),
        })
    }

    /// Verify a candidate password against a previously provisioned account.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, Error> {
        let hash_path = self.root.join(username).join(HASH_FILE_NAME);
        let hash = fs::read_to_string(&hash_path).context(ReadHashSnafu { path: &hash_path })?;
        verify_password(password, hash.trim_end()).context(VerifySnafu)
    }
}
