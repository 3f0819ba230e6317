//! # Smartlife Architecture
//!
//! Smartlife is a **UI-agnostic personal organizer library**: events and
//! reminders, checklist tasks, free-text notes and a small preferences
//! record, all kept in a local key-value store. The bundled `smartlife`
//! binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Parses arguments, prints results, picks exit codes       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - OrganizerApi: typed methods per collection               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Record lifecycle: create, update, toggle, delete, seed   │
//! │  - Generic over the record type and the backend             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: JSON documents, defaults on bad data        │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fault tolerance
//!
//! A storage fault degrades one operation and nothing else. Reads of a
//! missing or corrupt document yield the default (empty collection,
//! default preferences); failed writes come back as an `Err` and leave the
//! previous state in place. Nothing in the library panics on bad data.
//! Faults are reported through the `log` facade; the binary wires it to
//! `env_logger`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Record lifecycle logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types (`Event`, `Task`, `Note`, `Preferences`)
//! - [`ids`]: Identifier sources for new records
//! - [`config`]: Per-data-directory configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
