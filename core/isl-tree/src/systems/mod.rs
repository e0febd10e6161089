pub mod locate;
pub mod prune;
pub mod reorder;
