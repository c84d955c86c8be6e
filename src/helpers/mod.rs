pub mod calendar;
pub mod clockify;
pub mod entry;
