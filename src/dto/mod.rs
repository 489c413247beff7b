//! DTO modules that bridge services with templates and the wire format.

pub mod dashboard;
pub mod page;
