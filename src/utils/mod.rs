//! Small shared helpers (time parsing, date formatting, console tables).

pub mod colors;
pub mod date;
pub mod path;
pub mod table;
pub mod time;
