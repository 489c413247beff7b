//! Form payloads posted by the HTML views.

pub mod employee;
