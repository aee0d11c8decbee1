//! Configuration types and loading.
//!
//! - `types.rs` (data structures + defaults)
//! - `load.rs`  (IO: load_default + env overrides)

mod load;
mod types;

pub use load::{apply_env_overrides, load_default, load_from, CONFIG_FILE_NAME};
pub use types::*;
