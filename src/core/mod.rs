// @file: src/core/mod.rs
// @description: Exports response models, the proxy trait and the error type.
// @author: LAS.

pub mod models;
pub mod interfaces;
pub mod errors;
