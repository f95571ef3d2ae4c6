pub mod backend;
pub mod dedup;
pub mod page;
pub mod render;
pub mod sync;
