pub mod config;
pub mod run;
pub mod sort;
pub mod table;
