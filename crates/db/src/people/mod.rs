pub mod gateways;
pub mod memory_gateway;
pub mod models;
pub mod pg_gateway;
