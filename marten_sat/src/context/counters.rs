/// Counts for various things which count, roughly.
///
/// Maintained by the search driver, and readable by any harness which wants to inspect the shape
/// of a completed solve --- e.g. to confirm a branch was skipped by a backjump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of branching atoms chosen.
    pub total_decisions: usize,

    /// A count of values attempted across all branching atoms.
    ///
    /// At most twice the count of decisions, and less whenever a backjump skipped the second
    /// polarity of an atom.
    pub total_attempts: usize,

    /// A count of queued consequences applied.
    pub total_propagations: usize,

    /// A count of conflicts observed.
    pub total_conflicts: usize,

    /// A count of branching atoms returned past without their second polarity being tried.
    pub total_backjumps: usize,
}
