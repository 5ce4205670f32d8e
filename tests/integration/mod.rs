//! Integration tests with mock HTTP server

pub mod ip_lookup;
pub mod mock_server;
pub mod user_agent_parsing;
