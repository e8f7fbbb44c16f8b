mod tasks;

pub use tasks::{delete_task_handler, list_tasks_handler, upsert_task_handler};
