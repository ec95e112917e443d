// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git tag -l` listing.

use serde::Serialize;

use super::ParseResponse;
use crate::error::ParseError;

/// Tag names in listing order; `latest` is the last listed tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagResult {
    pub all: Vec<String>,
    pub latest: Option<String>,
}

impl ParseResponse for TagResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let all: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let latest = all.last().cloned();
        Ok(Self { all, latest })
    }

    fn empty() -> Self {
        Self::default()
    }
}
