pub mod memory_store;
pub mod seed;
pub mod sqlite;
