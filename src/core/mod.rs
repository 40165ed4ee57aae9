pub mod docket;
pub mod form;
pub mod hours;
pub mod session;
pub mod summary;
pub mod validate;
