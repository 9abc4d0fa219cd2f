//! Persisted agent state — a single JSON object on disk.
//!
//! # Disk format
//!
//! One JSON object at a fixed path (default `./agent_state.json`), e.g.
//! `{"last_summary": "...", "last_todo": ["- ..."], "summarize": "...", "todo": [...]}`.
//! Unknown keys are carried through untouched.

pub mod store;

pub use store::{MergeOutcome, State, StateError, StateStore};
