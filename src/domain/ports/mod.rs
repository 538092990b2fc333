pub mod key_value_store;
pub mod seed_source;
