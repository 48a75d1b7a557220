// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use maybe_owned::MaybeOwned;

use super::{SQLBuilder, SQLParam, dialect::Dialect};

/// A trait for types that can build themselves into an SQL expression.
///
/// Each constituent of an expression tree (column, field, comparison, boolean group, subquery,
/// etc.) implements this trait, which the renderer uses to hierarchically build an SQL string
/// and the list of parameters to be supplied to it. Building is a pre-order traversal: for a
/// binary construct, the left operand is built first, then the operator, then the right
/// operand, so parameters are always appended in the order their placeholders appear.
pub trait ExpressionBuilder {
    /// Build the SQL expression into the given SQL builder
    fn build(&self, builder: &mut SQLBuilder);

    /// Build the SQL expression into a string and return it. This is useful for testing/debugging,
    /// where we want to assert on the generated SQL without going through the whole process of
    /// creating an SQLBuilder, then building the SQL expression into it, and finally extracting
    /// the SQL string and params.
    fn to_sql(&self) -> (String, Vec<Arc<dyn SQLParam>>)
    where
        Self: Sized,
    {
        self.to_sql_with_dialect(Dialect::default())
    }

    /// Same as [`ExpressionBuilder::to_sql`], but for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> (String, Vec<Arc<dyn SQLParam>>)
    where
        Self: Sized,
    {
        let mut builder = SQLBuilder::with_dialect(dialect);
        self.build(&mut builder);
        builder.into_sql()
    }
}

impl<T> ExpressionBuilder for Box<T>
where
    T: ExpressionBuilder,
{
    fn build(&self, builder: &mut SQLBuilder) {
        self.as_ref().build(builder)
    }
}

impl<T> ExpressionBuilder for MaybeOwned<'_, T>
where
    T: ExpressionBuilder,
{
    fn build(&self, builder: &mut SQLBuilder) {
        self.as_ref().build(builder)
    }
}

impl<T> ExpressionBuilder for &T
where
    T: ExpressionBuilder,
{
    fn build(&self, builder: &mut SQLBuilder) {
        (**self).build(builder)
    }
}
