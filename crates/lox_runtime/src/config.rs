//! Runtime configuration.

pub const DEFAULT_HEAP_CAPACITY: usize = 1024;
pub const DEFAULT_STRINGS_CAPACITY: usize = 256;

/// Runtime configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Object slots reserved up front in the heap arena.
    pub heap_capacity: usize,
    /// Distinct hashes reserved up front in the interning registry.
    pub strings_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            heap_capacity: DEFAULT_HEAP_CAPACITY,
            strings_capacity: DEFAULT_STRINGS_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    /// Reads `LOX_HEAP_CAPACITY` and `LOX_STRINGS_CAPACITY`, keeping the
    /// default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };
        Self {
            heap_capacity: read("LOX_HEAP_CAPACITY", DEFAULT_HEAP_CAPACITY),
            strings_capacity: read("LOX_STRINGS_CAPACITY", DEFAULT_STRINGS_CAPACITY),
        }
    }
}
