//! Graph construction and representation
//!
//! This module builds the undirected sentence-similarity graph and stores it
//! in CSR form for PageRank.

pub mod builder;
pub mod csr;
