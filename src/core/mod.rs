pub mod builder;
pub mod event;
pub mod traits;
