pub mod builtin;
pub mod toml_loader;

pub use builtin::{builtin, BUILTIN_NAMES};
pub use toml_loader::{load_catalog, parse_catalog};
