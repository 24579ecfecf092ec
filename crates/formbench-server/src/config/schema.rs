use serde::Deserialize;

use formbench_core::error::{FormbenchError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FormbenchError::UnsupportedVersion);
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Landing document served at `GET /`. Loaded once at startup.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Append-only audit log. Created if absent.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// When true, form audit lines carry field lengths instead of values.
    #[serde(default)]
    pub redact_form_fields: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            index_file: default_index_file(),
            log_file: default_log_file(),
            redact_form_fields: false,
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(FormbenchError::BadConfig(
                "server.listen must be a valid socket address".into(),
            ));
        }
        if self.index_file.is_empty() {
            return Err(FormbenchError::BadConfig("server.index_file must not be empty".into()));
        }
        if self.log_file.is_empty() {
            return Err(FormbenchError::BadConfig("server.log_file must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_index_file() -> String {
    "static/index.html".into()
}
fn default_log_file() -> String {
    "server.log".into()
}
