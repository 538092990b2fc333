pub mod entry;
pub mod export;
pub mod ledger;
pub mod persistence;
