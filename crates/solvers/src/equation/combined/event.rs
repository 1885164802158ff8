/// Iteration event emitted by the combined chord-and-tangent method.
///
/// One event is emitted per iteration, after both new estimates are computed
/// and before the stopping test. All values refer to the bracket the
/// iteration started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket `[a, b]` at the start of the iteration.
    pub bracket: [f64; 2],

    /// Function value at `a`.
    pub fa: f64,

    /// Function value at `b`.
    pub fb: f64,

    /// Derivative at `b`.
    pub dfb: f64,

    /// New endpoints: the chord estimate from `a` and the tangent estimate
    /// from `b`.
    pub next: [f64; 2],

    /// Gap between the new endpoints, `|next[1] - next[0]|`.
    pub delta: f64,
}

impl Event {
    /// Returns the midpoint of the new endpoints.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.next[0] + self.next[1])
    }
}
