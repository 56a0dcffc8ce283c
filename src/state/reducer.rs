/// A state that knows how to move to its next value.
///
/// `reduce` must be pure: the same state and action always give the same
/// result. That is what lets actions recorded before hydration be replayed
/// on top of the stored state.
pub trait Reducer: Clone + PartialEq {
    type Action: Clone;

    fn reduce(&self, action: Self::Action) -> Self;
}
