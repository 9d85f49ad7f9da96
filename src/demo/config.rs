//! Demo configuration

/// Configuration for the demonstration run
#[derive(Debug, Clone, Default)]
pub struct DemoConfig {
    /// Seed for the playlist shuffle (None = fresh entropy each run)
    pub seed: Option<u64>,

    /// Also print the final playlist as JSON
    pub json: bool,
}

impl DemoConfig {
    /// Create a new demo configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable JSON output
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}
