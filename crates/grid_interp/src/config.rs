//! Interpolation engine configuration.
//!
//! Controls how a query batch is scheduled and whether the range diagnostic
//! is logged. None of these settings change the numbers produced.

use crate::types::ConfigError;

/// Default minimum batch size before evaluation moves onto the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Default minimum number of query points handed to one rayon job.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 64;

/// Interpolation engine configuration.
///
/// Use [`InterpolationConfigBuilder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use grid_interp::InterpolationConfig;
///
/// let config = InterpolationConfig::builder()
///     .parallel_threshold(10_000)
///     .min_chunk_len(256)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.parallel_threshold(), 10_000);
/// assert!(config.log_range_warning());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InterpolationConfig {
    /// Query batches at least this large are evaluated in parallel.
    parallel_threshold: usize,
    /// Minimum points per rayon job.
    min_chunk_len: usize,
    /// Also emit the range diagnostic as a `tracing` warning.
    log_range_warning: bool,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            log_range_warning: true,
        }
    }
}

impl InterpolationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> InterpolationConfigBuilder {
        InterpolationConfigBuilder::default()
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Returns the batch size from which evaluation runs in parallel.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns the minimum number of points per rayon job.
    #[inline]
    pub fn min_chunk_len(&self) -> usize {
        self.min_chunk_len
    }

    /// Returns whether the range diagnostic is logged.
    #[inline]
    pub fn log_range_warning(&self) -> bool {
        self.log_range_warning
    }

    /// Returns whether a batch of `n_points` should run in parallel.
    #[inline]
    pub fn should_parallelize(&self, n_points: usize) -> bool {
        n_points >= self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidChunkLength` if `min_chunk_len` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_chunk_len == 0 {
            return Err(ConfigError::InvalidChunkLength(self.min_chunk_len));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML.
    ///
    /// Missing keys take their default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_interp::InterpolationConfig;
    ///
    /// let config = InterpolationConfig::from_toml_str("parallel_threshold = 50").unwrap();
    /// assert_eq!(config.parallel_threshold(), 50);
    /// assert_eq!(config.min_chunk_len(), 64);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`InterpolationConfig`].
#[derive(Clone, Debug, Default)]
pub struct InterpolationConfigBuilder {
    parallel_threshold: Option<usize>,
    min_chunk_len: Option<usize>,
    log_range_warning: Option<bool>,
}

impl InterpolationConfigBuilder {
    /// Sets the batch size from which evaluation runs in parallel.
    #[inline]
    pub fn parallel_threshold(mut self, n_points: usize) -> Self {
        self.parallel_threshold = Some(n_points);
        self
    }

    /// Sets the minimum number of points per rayon job (must be > 0).
    #[inline]
    pub fn min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = Some(len);
        self
    }

    /// Sets whether the range diagnostic is logged.
    #[inline]
    pub fn log_range_warning(mut self, enabled: bool) -> Self {
        self.log_range_warning = Some(enabled);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidChunkLength` for a zero chunk length.
    pub fn build(self) -> Result<InterpolationConfig, ConfigError> {
        let defaults = InterpolationConfig::default();
        let config = InterpolationConfig {
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            min_chunk_len: self.min_chunk_len.unwrap_or(defaults.min_chunk_len),
            log_range_warning: self
                .log_range_warning
                .unwrap_or(defaults.log_range_warning),
        };

        config.validate()?;
        Ok(config)
    }
}
