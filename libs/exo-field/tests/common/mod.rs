// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use exo_field::SQLParam;

/// Assert the rendered SQL and its parameters, in order
pub fn assert_sql(
    actual: (String, Vec<Arc<dyn SQLParam>>),
    expected_sql: &str,
    expected_params: &[&dyn SQLParam],
) {
    let (sql, params) = actual;

    assert_eq!(sql, expected_sql);
    assert_eq!(
        params.len(),
        expected_params.len(),
        "Parameter count mismatch for {sql}"
    );

    for (index, (actual, expected)) in params.iter().zip(expected_params).enumerate() {
        assert!(
            SQLParam::eq(&**actual, *expected),
            "Parameter mismatch at {index}: {actual:?} != {expected:?}"
        );
    }
}
