// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::expression_error::ExpressionError;

/// Renderer configuration: how identifiers are quoted and how placeholders are spelled.
///
/// Deserializes from the lower-case name (`"postgres"`, `"mysql"`, `"sqlite"`), so it can be
/// part of the renderer's own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `"ident"` and `$1, $2, ...`
    #[default]
    Postgres,
    /// `` `ident` `` and `?`
    MySql,
    /// `"ident"` and `?1, ?2, ...`
    Sqlite,
}

impl Dialect {
    pub fn identifier_quote(self) -> char {
        match self {
            Dialect::Postgres | Dialect::Sqlite => '"',
            Dialect::MySql => '`',
        }
    }

    /// Placeholder for the parameter at the given (1-based) position
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::MySql => "?".to_string(),
            Dialect::Sqlite => format!("?{index}"),
        }
    }
}

impl FromStr for Dialect {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite" => Ok(Dialect::Sqlite),
            _ => Err(ExpressionError::UnknownDialect(s.to_string())),
        }
    }
}
