//! Ask-EKA: a rule-based UPSC study assistant for the terminal.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod conversation;
pub mod error;
pub mod events;
pub mod knowledge;
pub mod logging;
pub mod responder;
pub mod selector;
pub mod session;
pub mod templates;
pub mod ui;

pub use config::Config;
pub use error::AskError;
pub use selector::{ResponseSelector, Selection, SelectionKind};
pub use session::ChatSession;
