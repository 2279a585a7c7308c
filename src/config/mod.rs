/*!
Configuration of a context.

All configuration for a context is contained within a [Config], fixed when the context is made.

```rust
# use otter_kernel::config::{Config, PropagationMode};
let config = Config {
    propagation: PropagationMode::Queue,
    ..Default::default()
};
assert!(config.simplify);
```
*/

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How to find forced literals during [propagation](crate::procedures::propagate).
    pub propagation: PropagationMode,

    /// Whether to rewrite the clause database with its [rebase](crate::procedures::rebase) when a scan reaches a fixpoint.
    ///
    /// Propagation with a queue rebases after each forced literal, regardless.
    pub simplify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            propagation: PropagationMode::default(),
            simplify: true,
        }
    }
}

/// Variations of unit propagation.
///
/// Each variation reaches the same valuation and the same verdict on the same formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PropagationMode {
    /// Repeated scans of every clause until some scan forces nothing.
    #[default]
    Scan,

    /// A work-list of forced literals, with the formula rebased after each literal is applied.
    Queue,
}

impl std::fmt::Display for PropagationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Queue => write!(f, "queue"),
        }
    }
}
