pub const DEFAULT_API_BASE: &str = "https://hirishi-mirror-backend.onrender.com";

/// Backend origin baked in at build time. `ENTRIES_API_BASE` is read by the compiler, not at runtime.
pub const API_BASE: &str = match option_env!("ENTRIES_API_BASE") {
    Some(api_base) => api_base,
    None => DEFAULT_API_BASE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}
