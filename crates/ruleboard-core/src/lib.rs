//! Ruleboard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Ruleboard
//! parser, the row expander and the exporters. It includes:
//!
//! - **Semantic**: Domain entities recovered from a diagram ([`semantic`] module)
//! - **Row**: The flat firewall rule row that is exported ([`row::FirewallCsvRow`])
//! - **Status**: Rule status derived from the arrow color ([`status::Status`])

pub mod row;
pub mod semantic;
pub mod status;
