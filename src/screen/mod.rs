pub mod add_task;
pub mod home;
pub mod task_detail;
