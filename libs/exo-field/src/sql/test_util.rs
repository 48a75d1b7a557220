// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![cfg(test)]

macro_rules! assert_params {
    ($actual_params:expr) => {
        assert!($actual_params.is_empty(), "Extra actual parameters");
    };
    ($actual_params:expr, $($expected_param:expr),+) => {{
        let actual_params = &$actual_params;
        let mut index = 0;
        $(
            assert!(index < actual_params.len(), "Missing actual parameter");
            assert_eq!(
                &*actual_params[index],
                &$expected_param as &dyn $crate::sql::SQLParam,
                "Parameter mismatch at {}",
                index
            );
            index += 1;
        )+
        assert_eq!(index, actual_params.len(), "Extra actual parameters");
    }};
}

macro_rules! assert_binding {
    ($actual:expr, $expected_stmt:expr) => {{
        let (stmt, params) = $actual;
        assert_eq!(stmt.as_str(), $expected_stmt);
        assert_params!(params);
    }};
    ($actual:expr, $expected_stmt:expr, $($rest:expr),+) => {{
        let (stmt, params) = $actual;
        assert_eq!(stmt.as_str(), $expected_stmt);
        assert_params!(params, $($rest),+);
    }};
}
