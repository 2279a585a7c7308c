/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of rounds of propagation.
    ///
    /// When scanning, one round is one scan of every clause.
    /// With a queue, one round is the application of one queued literal.
    pub rounds: usize,

    /// A count of rebases of the clause database.
    pub rebases: usize,

    /// A count of literals forced by propagation (unit clauses added are not counted).
    pub forced: usize,
}
