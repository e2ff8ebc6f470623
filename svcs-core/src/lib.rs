//! # svcs-core
//!
//! Core library for svcs - a minimal file-based version control system.
//!
//! Tracked files are fingerprinted with SHA-256, snapshotted into
//! content-addressed commit directories, recorded in a linear history log,
//! and restored into the working area on checkout.

pub mod author;
pub mod checkout;
pub mod config;
pub mod error;
pub mod hasher;
pub mod history;
pub mod models;
pub mod registry;
pub mod repository;
pub mod store;

pub use checkout::CheckoutEngine;
pub use config::RepoConfig;
pub use error::{Error, ErrorKind, Result};
pub use hasher::ContentHasher;
pub use history::HistoryLog;
pub use models::{Commit, CommitId, Fingerprint, HistoryEntry, StoredFile};
pub use registry::{TrackOutcome, TrackedFileRegistry};
pub use repository::Repository;
pub use store::CommitStore;
