pub mod entry;
pub mod reference;
pub mod report;
pub mod shift_type;
pub mod snapshot;
