pub mod albion;
pub mod cache;
