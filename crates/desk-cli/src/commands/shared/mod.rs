pub mod confirm;
pub mod limit;
pub mod notice;
pub mod parse;
