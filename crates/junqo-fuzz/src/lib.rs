// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junqo-fuzz library
//!
//! This module exports the driver's configuration and batch runner for use in
//! integration tests and as a library.

pub mod config;
pub mod runner;
