//! Command implementations

mod config;
mod dedup;
mod format;
mod generate;
mod io;
mod validate;

pub use config::show_config;
pub use dedup::dedup;
pub use format::format;
pub use generate::generate;
pub use validate::validate;
