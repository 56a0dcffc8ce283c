pub mod persisted;
pub mod persistence;
pub mod reducer;

pub use persisted::PersistedReducer;
pub use reducer::Reducer;
