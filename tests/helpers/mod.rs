//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod slice_assertions;
pub mod source_fixtures;
