pub mod btcturk;
