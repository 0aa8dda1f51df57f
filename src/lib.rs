pub mod app;
pub mod dispatch;
pub mod operation;
pub mod registry;

mod float_eq;
