// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("SQL template has {placeholders} placeholder(s), but {params} parameter(s) were supplied")]
    PlaceholderMismatch { placeholders: usize, params: usize },

    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}
