pub mod clockify;
pub mod outcome;
