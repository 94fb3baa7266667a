// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify properties that must hold for
//! all inputs: value-object bounds, keyword round-trips, collection
//! isolation and action ordering.

mod fixtures;
mod property;
