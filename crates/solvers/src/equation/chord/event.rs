/// Iteration event emitted by the chord method.
///
/// One event is emitted per secant step, after the new point is evaluated and
/// before the stopping test and bracket update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket `[a, b]` the secant was drawn across.
    pub bracket: [f64; 2],

    /// Function value at `a`.
    pub fa: f64,

    /// Function value at `b`.
    pub fb: f64,

    /// Where the secant crosses zero; the new estimate.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Distance from the previous estimate (initially `b`) to `x`.
    pub delta: f64,
}
