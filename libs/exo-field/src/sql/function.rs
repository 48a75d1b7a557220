// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Scalar SQL functions. Each returns a [`Field`] that can be compared, ordered, or aliased
//! like any column.

use super::{SQLParamContainer, field::Field, leaf::Leaf};

/// `UNIX_TIMESTAMP()` for the current time, or `UNIX_TIMESTAMP(?)` for `date`
pub fn unix_timestamp(date: Option<&str>) -> Field {
    let leaf = match date {
        Some(date) => Leaf::from_template(
            "UNIX_TIMESTAMP(?)",
            vec![SQLParamContainer::new(date.to_string())],
        ),
        None => Leaf::from_template("UNIX_TIMESTAMP()", vec![]),
    };

    Field::from_leaf(leaf)
}

/// `FROM_UNIXTIME(?)`, or `FROM_UNIXTIME(?, ?)` with a format. A blank format is ignored.
pub fn from_unix_time(timestamp: i64, format: Option<&str>) -> Field {
    let timestamp = SQLParamContainer::new(timestamp);

    let leaf = match format.filter(|format| !format.trim().is_empty()) {
        Some(format) => Leaf::from_template(
            "FROM_UNIXTIME(?, ?)",
            vec![timestamp, SQLParamContainer::new(format.to_string())],
        ),
        None => Leaf::from_template("FROM_UNIXTIME(?)", vec![timestamp]),
    };

    Field::from_leaf(leaf)
}

/// `RAND()` (MySQL)
pub fn rand() -> Field {
    Field::from_leaf(Leaf::from_template("RAND()", vec![]))
}

/// `RANDOM()` (Postgres, SQLite)
pub fn random() -> Field {
    Field::from_leaf(Leaf::from_template("RANDOM()", vec![]))
}
