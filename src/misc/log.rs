/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [rebasing](crate::procedures::rebase)
    pub const REBASE: &str = "rebase";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [consequence queue](crate::db::consequence_q)
    pub const QUEUE: &str = "queue";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
