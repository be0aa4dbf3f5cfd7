use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub avatar: AvatarSettings,
    pub polling: PollingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding the prebuilt browser bundle served for unmatched
    /// routes.
    pub static_dir: String,
    pub max_upload_mb: usize,
}

/// Everything the hosted avatar service needs: endpoint, credential, and
/// the fixed voice the generated talk uses.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarSettings {
    pub api_key: String,
    pub base_url: String,
    pub voice_provider: String,
    pub voice_id: String,
    pub stitch: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingSettings {
    pub interval_secs: u64,
    pub max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
