//! Infrastructure layer - Implementations of domain traits

pub mod account;
pub mod logging;
pub mod storage;
