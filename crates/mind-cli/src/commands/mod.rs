pub mod analyze;
pub mod dispatch;
pub mod journal;
pub mod privacy;
pub mod shared;
pub mod support;
pub mod tools;
