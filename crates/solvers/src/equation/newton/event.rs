/// Iteration event emitted by Newton's method.
///
/// One event is emitted per tangent step, after the step is computed and
/// before the stopping test is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Point the tangent was drawn at.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative at `x`.
    pub dfx: f64,

    /// Where the tangent crosses zero; the next estimate.
    pub x_next: f64,

    /// Step length `|x_next - x|`.
    pub delta: f64,
}
