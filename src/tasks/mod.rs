pub mod store;

pub use store::{TaskList, TaskStore};
