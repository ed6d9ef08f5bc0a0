//! Configuration for respwire
//!
//! Decode-side limits and compatibility switches with sensible defaults.
//! Encoding needs no configuration.

/// Configuration for the decoder
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    // -------------------------------------------------------------------------
    // Resource Limits
    // -------------------------------------------------------------------------
    /// Maximum array nesting depth. An array nested deeper than this is
    /// rejected as invalid, guarding the call stack against adversarially
    /// deep inputs.
    pub max_depth: usize,

    /// Maximum declared bulk string length (in bytes). Larger declared
    /// lengths are rejected before any payload allocation.
    pub max_bulk_len: usize,

    /// Maximum declared array element count. Larger declared counts are
    /// rejected before any element allocation.
    pub max_array_len: usize,

    // -------------------------------------------------------------------------
    // Compatibility
    // -------------------------------------------------------------------------
    /// Legacy line-reader behavior: when a CR inside a line is not followed
    /// by LF, silently discard the CR and the byte after it and resume
    /// scanning. When disabled (the default), a lone CR is an invalid
    /// message.
    pub lenient_lone_cr: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_bulk_len: 512 * 1024 * 1024, // 512 MB, the conventional proto limit
            max_array_len: 1024 * 1024,
            lenient_lone_cr: false,
        }
    }
}

impl DecodeConfig {
    /// Create a new config builder
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Default)]
pub struct DecodeConfigBuilder {
    config: DecodeConfig,
}

impl DecodeConfigBuilder {
    /// Set the maximum array nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the maximum declared bulk string length (in bytes)
    pub fn max_bulk_len(mut self, len: usize) -> Self {
        self.config.max_bulk_len = len;
        self
    }

    /// Set the maximum declared array element count
    pub fn max_array_len(mut self, len: usize) -> Self {
        self.config.max_array_len = len;
        self
    }

    /// Enable or disable the legacy lone-CR line-reader behavior
    pub fn lenient_lone_cr(mut self, lenient: bool) -> Self {
        self.config.lenient_lone_cr = lenient;
        self
    }

    pub fn build(self) -> DecodeConfig {
        self.config
    }
}
