// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Endpoint handlers (HTML pages and JSON API)

pub mod contact;
pub mod pages;
pub mod project;
