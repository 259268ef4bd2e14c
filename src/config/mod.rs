//! Configuration: locating, loading and resolving `dotem.toml`.
pub mod discovery;
pub mod profiles;
pub mod toml_loader;
pub mod tree;

pub use discovery::resolve_config_path;
pub use profiles::{DEFAULT_PROFILE, ProfilePath, ResolvedEnv, resolve, resolve_all};
pub use toml_loader::load_tree;
pub use tree::{ConfigNode, ConfigTree};
