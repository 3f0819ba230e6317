//! Record lifecycle logic.
//!
//! Every command is a plain function over a [`crate::store::RecordStore`],
//! generic over the backend and, for the three collections, over the
//! [`crate::model::Record`] type. Commands never print and never panic on
//! storage faults; they hand back values or [`crate::error::StoreError`]s.

use std::path::{Path, PathBuf};

pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod preferences;
pub mod toggle;
pub mod update;

const STORAGE_DIR: &str = "storage";

/// On-disk layout of a data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where the config file lives.
    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    /// Where the record documents live.
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(STORAGE_DIR)
    }
}
