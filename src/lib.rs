#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod bfibe;
pub mod errors;
pub mod keys;
pub mod records;
pub mod schemes;
pub mod utils;
