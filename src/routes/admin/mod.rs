//! src/routes/admin/mod.rs

mod cancel;
mod dashboard;
mod logout;

pub use cancel::*;
pub use dashboard::admin_dashboard;
pub use logout::log_out;
