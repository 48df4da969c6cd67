//! answer-dns application layer: ports, the answer engine and use cases.
pub mod ports;
pub mod services;
pub mod use_cases;
