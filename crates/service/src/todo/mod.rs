pub mod repository;
pub mod service;

pub use repository::{SeaOrmTodoRepository, TodoRepository};
pub use service::TodoService;
