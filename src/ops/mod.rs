pub mod ids;
pub mod store;
pub mod todo_ops;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use store::TodoStore;
