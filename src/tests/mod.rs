#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod dist_tests;
pub mod diagram_tests;
pub mod chain_tests;
