/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const BACKJUMP: &str = "backjump";
    pub const CONFLICT: &str = "conflict";
    pub const DECISION: &str = "decision";
    pub const PARSE: &str = "parse";
    pub const PROPAGATION: &str = "propagation";
    pub const QUEUE: &str = "queue";
    pub const VALUATION: &str = "valuation";
}
