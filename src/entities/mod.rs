pub mod tag;
pub mod todo;
pub mod todo_tag;
