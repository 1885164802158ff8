/// Control actions an observer can return to any equation solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest estimate.
    StopEarly,
}
