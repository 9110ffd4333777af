//! Engine configuration

/// Tunables shared by the strategies and the harness.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of worker processes for the process-pool strategy.
    pub pool_size: usize,
    /// Thread count for the threaded strategy (None = rayon default).
    pub threads: Option<usize>,
    /// Number of entries in the reported top-words list.
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_size: 4,
            threads: None,
            top_n: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.threads, None);
        assert_eq!(config.top_n, 10);
    }
}
