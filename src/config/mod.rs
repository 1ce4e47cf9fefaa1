/// SenML version written by default, per RFC 8428
pub const DEFAULT_VERSION: u64 = 5;

/// Serialization settings for compact documents
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Value of the `bver` marker put on the first record
    pub version: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
        }
    }
}
