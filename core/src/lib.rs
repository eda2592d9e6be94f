#![no_std]

extern crate alloc;

pub use error::*;
pub use history::*;
pub use rules::{LINES, Status, apply_move, winner};
pub use snapshot::*;
pub use types::*;

mod error;
mod history;
pub mod rules;
mod snapshot;
mod types;
