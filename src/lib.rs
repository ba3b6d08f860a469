pub mod core;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test_server;

pub use crate::core::execute::run;
pub use crate::core::show_result::{render_result, show_result};
pub use crate::models::config::{Config, DispatchPolicy};
pub use crate::models::result::TestResult;
