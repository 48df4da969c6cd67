pub mod answers;
pub mod dns;
