//! TaskPad core: a local task-list pipeline (task store, view filter, stats,
//! theme) persisted to a string key-value store on disk.
//!
//! The presentation shell is an external collaborator. It owns rendering,
//! the delete-confirmation dialog, and keyboard wiring, and talks to this
//! crate through the operations in [`commands`]: it implements
//! [`commands::CommandCtx`] to supply the data directory and to receive
//! [`events::StatePayload`] snapshots and [`events::Notification`] messages
//! after each operation.

pub mod commands;
pub mod dates;
pub mod events;
pub mod filter;
pub mod logging;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
