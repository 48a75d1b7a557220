// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ExpressionBuilder, SQLBuilder};

/// A reference to a column, optionally qualified by a table (and a schema).
///
/// Names are always emitted as quoted identifiers. The only exception is a `raw` reference,
/// which can be created only from within this crate (for `*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    schema: Option<String>,
    table: Option<String>,
    name: String,
    raw: bool,
}

/// Options to tweak a [`ColumnRef`] when creating a [`Field`](super::field::Field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOption {
    /// Qualify the table with a schema: `"schema"."table"."column"`
    Schema(String),
    /// Drop the table qualifier: `"column"`
    Unqualified,
}

impl ColumnRef {
    /// Create a column reference. An empty table name means the column is unqualified.
    pub fn new(table: &str, name: &str, options: &[FieldOption]) -> Self {
        let column = Self {
            schema: None,
            table: (!table.is_empty()).then(|| table.to_string()),
            name: name.to_string(),
            raw: false,
        };

        let column = options
            .iter()
            .fold(column, |column, option| column.with_option(option));

        // Options must never be able to turn a user-supplied name into raw SQL
        Self {
            raw: false,
            ..column
        }
    }

    pub(crate) fn star() -> Self {
        Self {
            schema: None,
            table: None,
            name: "*".to_string(),
            raw: true,
        }
    }

    fn with_option(self, option: &FieldOption) -> Self {
        match option {
            FieldOption::Schema(schema) => Self {
                schema: Some(schema.clone()),
                ..self
            },
            FieldOption::Unqualified => Self {
                table: None,
                schema: None,
                ..self
            },
        }
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }
}

impl ExpressionBuilder for ColumnRef {
    fn build(&self, builder: &mut SQLBuilder) {
        if self.raw {
            builder.push_str(&self.name);
        } else {
            builder.push_column(self.schema.as_deref(), self.table.as_deref(), &self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use multiplatform_test::multiplatform_test;

    use super::*;
    use crate::sql::dialect::Dialect;

    #[multiplatform_test]
    fn qualified() {
        let column = ColumnRef::new("users", "age", &[]);
        assert_binding!(column.to_sql(), r#""users"."age""#);
        assert!(!column.is_raw());
    }

    #[multiplatform_test]
    fn options() {
        let column = ColumnRef::new("users", "age", &[FieldOption::Schema("auth".into())]);
        assert_binding!(column.to_sql(), r#""auth"."users"."age""#);

        let column = ColumnRef::new("users", "age", &[FieldOption::Unqualified]);
        assert_binding!(column.to_sql(), r#""age""#);
        assert_eq!(column.table(), None);

        let column = ColumnRef::new("", "age", &[]);
        assert_binding!(column.to_sql(), r#""age""#);
    }

    #[multiplatform_test]
    fn sql_looking_names_stay_identifiers() {
        let column = ColumnRef::new("users", "age) OR (1=1", &[]);
        assert_binding!(column.to_sql(), r#""users"."age) OR (1=1""#);

        let column = ColumnRef::new("users", "name", &[]);
        assert_binding!(
            column.to_sql_with_dialect(Dialect::MySql),
            "`users`.`name`"
        );
    }

    #[multiplatform_test]
    fn star() {
        assert_binding!(ColumnRef::star().to_sql(), "*");
    }
}
