// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod server;

pub use server::{create_http_server, serve, ServerError};
