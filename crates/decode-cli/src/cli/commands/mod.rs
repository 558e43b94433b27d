//! CLI command handlers. Each command is in its own file.

mod check;
mod ciphers;
mod codec;
mod shorten;

pub use check::run_check;
pub use ciphers::run_ciphers;
pub use codec::{run_codec, Direction};
pub use shorten::run_shorten;
