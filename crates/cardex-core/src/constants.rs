/// Output naming shared by every export format
pub const FILENAME_PREFIX: &str = "Contacts";
pub const FILENAME_TOKEN: &str = "Service-Missionary";

/// Label attached to every exported contact
pub const CATEGORY_LABEL: &str = "Service";

/// Display name used when a contact has no title or name parts
pub const FALLBACK_FULL_NAME: &str = "Contact";

/// Number of positional columns in a contact row
pub const ROW_WIDTH: usize = 8;

/// Configuration sources
pub const CONFIG_FILE: &str = "cardex.toml";
pub const ENV_PREFIX: &str = "CARDEX";
