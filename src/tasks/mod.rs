pub mod handlers;
pub mod types;

pub use handlers::configure_task_routes;
pub use types::Task;
