use bcrypt::Version;

/// Hashing parameters, fixed once at startup and handed to the encoder.
pub struct EncoderConfig {
    pub version: Version,
    pub cost: u32,
}

impl std::fmt::Debug for EncoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncoderConfig")
            .field("version", &self.version_tag())
            .field("cost", &self.cost)
            .finish()
    }
}

impl EncoderConfig {
    /// Modular-crypt tag for the configured version, e.g. `2b`.
    pub fn version_tag(&self) -> &'static str {
        match self.version {
            Version::TwoA => "2a",
            Version::TwoX => "2x",
            Version::TwoY => "2y",
            Version::TwoB => "2b",
        }
    }

    /// Owned copy of the configured version (`bcrypt::Version` has no
    /// `Clone`/`Copy` impl, so this rebuilds an equivalent value).
    pub fn version(&self) -> Version {
        match self.version {
            Version::TwoA => Version::TwoA,
            Version::TwoX => Version::TwoX,
            Version::TwoY => Version::TwoY,
            Version::TwoB => Version::TwoB,
        }
    }
}

impl Default for EncoderConfig {
    // 2b at cost 12 is the format NiFi stores; both values stay pinned so
    // every hash this tool emits verifies there.
    fn default() -> Self {
        Self {
            version: Version::TwoB,
            cost: 12,
        }
    }
}
