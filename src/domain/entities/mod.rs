pub mod bet;
