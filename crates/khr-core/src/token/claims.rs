// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session token claims.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{TokenError, TokenResult};
use crate::principal::Principal;

/// Format used when writing `timeCreated`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Older issuers wrote fractional seconds, or dropped the seconds entirely
// when they were zero.
const ACCEPTED_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The three claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Legacy principal id (`-777` for the administrator).
    pub principal_id: i32,
    /// Display credential: the user's email, empty for the administrator.
    pub credential: String,
    /// Local issuance time, second precision.
    pub created_at: NaiveDateTime,
}

impl SessionClaims {
    /// Returns the principal encoded in the claims.
    pub fn principal(&self) -> Principal {
        Principal::from_legacy_id(self.principal_id)
    }

    pub(crate) fn to_wire(&self) -> WireClaims {
        WireClaims {
            principal_id: self.principal_id,
            credential: self.credential.clone(),
            created_at: self.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub(crate) fn from_wire(wire: WireClaims) -> TokenResult<Self> {
        let created_at = parse_timestamp(&wire.created_at)?;
        Ok(Self {
            principal_id: wire.principal_id,
            credential: wire.credential,
            created_at,
        })
    }
}

/// Claims as they appear in the token payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct WireClaims {
    #[serde(rename = "koalibeeId")]
    principal_id: i32,
    #[serde(rename = "email")]
    credential: String,
    #[serde(rename = "timeCreated")]
    created_at: String,
}

fn parse_timestamp(value: &str) -> TokenResult<NaiveDateTime> {
    ACCEPTED_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| TokenError::InvalidTimestamp(value.to_string()))
}
