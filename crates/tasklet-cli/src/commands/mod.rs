pub mod add;
pub mod dashboard;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod session;
pub mod shared;
pub mod stats;
pub mod theme;
pub mod toggle;
