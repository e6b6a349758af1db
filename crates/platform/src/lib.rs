//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password digest computation (SHA-256)

pub mod digest;
