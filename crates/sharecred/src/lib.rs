#![warn(missing_docs)]

//! Credential provisioning for a simple file-sharing service.
//!
//! This library validates usernames and passwords against the share's
//! allowed alphabet, generates secure password suggestions, and persists a
//! bcrypt hash per user under a download directory.
//!
//! # Example
//!
//! ```no_run
//! use sharecred::{generate_suggestion, AccountStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let password = generate_suggestion();
//! let store = AccountStore::new("/srv/share/download", "share.example.com");
//! let account = store.provision("alice", &password)?;
//! println!("hash written to {}", account.hash_path.display());
//! println!("login at {}", account.login_url);
//! # Ok(())
//! # }
//! ```

mod account;
pub mod charset;
mod hash;
mod suggest;
pub mod validate;

pub use account::{AccountStore, Error as AccountError, ProvisionedAccount};
pub use hash::{hash_password, verify_password, Error as HashError};
pub use suggest::{generate_suggestion, SUGGESTION_LEN};
pub use validate::{
    check_password, check_username, is_valid_password, is_valid_username,
    Error as ValidationError,
};
