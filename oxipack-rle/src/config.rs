//! Run-length encoder configuration.

/// Longest run a single pair may carry.
pub const MAX_RUN: u8 = u8::MAX;

/// Run-length encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleConfig {
    /// Runs longer than this are split into several pairs (1-255).
    pub max_run: u8,
}

impl RleConfig {
    /// Full-width runs of up to 255 bytes.
    pub const DEFAULT: Self = Self { max_run: MAX_RUN };

    /// Create a configuration, clamping `max_run` to 1-255.
    pub fn new(max_run: u8) -> Self {
        Self {
            max_run: max_run.max(1),
        }
    }
}

impl Default for RleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        assert_eq!(RleConfig::default().max_run, 255);
        assert_eq!(RleConfig::new(0).max_run, 1);
        assert_eq!(RleConfig::new(16).max_run, 16);
    }
}
