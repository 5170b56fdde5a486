//! tests/api/main.rs

mod health_check;
mod subscriptions;
mod subscriptions_cancel;
