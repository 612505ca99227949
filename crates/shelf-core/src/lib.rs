// Rust guideline compliant 2026-10-16

//! Shelf Core Library
//!
//! This crate provides the foundational components for the Shelf library inventory:
//! - Data models (Book, Status)
//! - FSM logic (issue/return transitions)
//! - Record codecs (legacy pipe-delimited lines, JSONL)
//! - Storage engine (line-oriented read/write of the backing file)
//! - The in-memory inventory store
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod fsm;
pub mod inventory;
pub mod models;
pub mod record;
pub mod storage;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::Action;
pub use inventory::{InventoryStore, LoadSummary};
pub use models::{Book, Status};
pub use record::{RecordFormat, DELIMITER};
pub use storage::Storage;
