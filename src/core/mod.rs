pub mod concurrency_controller;
pub mod execute;
pub(crate) mod http_client;
pub(crate) mod request_task;
pub mod run_counters;
pub mod show_result;
