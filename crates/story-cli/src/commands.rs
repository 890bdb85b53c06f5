pub mod dispatch;
pub mod schema;
pub mod setup;
pub mod tables;
