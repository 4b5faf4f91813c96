// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use folio_catalog::Project;
use serde::{Deserialize, Serialize};

/// Default acknowledgment returned for every contact submission
pub const CONTACT_ACK_MESSAGE: &str = "Messaggio ricevuto! Ti risponderò al più presto.";

/// Body of `POST /api/contact`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_ACK_MESSAGE.to_string(),
        }
    }
}

/// Body of `GET /api/project/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    pub project: Project,
}
