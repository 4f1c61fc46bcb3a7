pub mod filter;
pub mod img;
pub mod my_err;
pub mod processing;
