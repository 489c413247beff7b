//! Domain entities shared between services, routes, and the API client.

pub mod employee;
