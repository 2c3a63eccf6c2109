pub mod speech;
pub mod stdin;
