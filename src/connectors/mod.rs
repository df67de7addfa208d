// @file: src/connectors/mod.rs
// @description: HTTP connectors to upstream market-data services.
// @author: LAS.

pub mod kaivest;
