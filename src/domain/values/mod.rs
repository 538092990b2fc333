pub mod balance;
pub mod bet_date;
pub mod money;
pub mod number;
pub mod outcome;
