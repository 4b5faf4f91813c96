// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Common types used by every endpoint

pub mod error;
pub mod response;
pub mod types;

pub use error::{ApiError, ApiErrorCode, PageError};
pub use response::{ContactAck, ProjectEnvelope, CONTACT_ACK_MESSAGE};
pub use types::{ApiState, SiteSettings};

/// Result type for JSON API operations
pub type ApiResult<T> = Result<T, ApiError>;
