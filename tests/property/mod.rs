// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod collection_isolation;
mod scalar_invariants;
