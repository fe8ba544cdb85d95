/// Separator between resource path segments.
pub const PATH_SEPARATOR: char = '/';

/// The root of the resource namespace.
pub const ROOT_RESOURCE: &str = "/";

/// Name of the built-in principal that holds every privilege.
pub const ADMIN_USER_NAME: &str = "ADMIN_USER";

/// Prefix for environment variable configuration overrides.
pub const ENV_PREFIX: &str = "TOLLGATE";

/// Configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tollgate.toml";
