use crate::config::EncoderConfig;
use crate::error::HasherError;

/// Thin wrapper over the bcrypt primitive. Holds nothing but the fixed
/// version/cost configuration.
pub struct PasswordEncoder {
    config: EncoderConfig,
}

impl PasswordEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Hash `password` with a fresh random salt. Length limits are left to
    /// the primitive; nothing is truncated or pre-validated here.
    pub fn encode(&self, password: &str) -> Result<String, HasherError> {
        let parts = bcrypt::hash_with_result(password, self.config.cost)
            .map_err(|e| HasherError::Hash(e.to_string()))?;
        Ok(parts.format_for_version(self.config.version()))
    }

    /// Strict verification: `encoded` must carry the configured version tag,
    /// and anything malformed is a non-match rather than a best-effort parse.
    pub fn matches(&self, password: &str, encoded: &str) -> bool {
        if !encoded.starts_with(&format!("${}$", self.config.version_tag())) {
            return false;
        }
        bcrypt::verify(password, encoded).unwrap_or(false)
    }
}
