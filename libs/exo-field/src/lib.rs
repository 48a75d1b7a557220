// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// The core idea in this library is that of a [Field], a reference to a column (or a computed
/// value), from which predicates ([Expression]), assignments ([AssignExpression]), and
/// projection/ordering elements ([AliasedField], [OrderByElement]) are built. These form
/// immutable trees that a query renderer walks through [ExpressionBuilder] to produce SQL text
/// along with the list of parameters to bind.
///
/// For example, `Field::new("users", "age").gt(18)` renders as `"users"."age" > $1` with `18` as
/// the only parameter. Predicates combine with [and], [or], and [not] (or the `!` operator),
/// which simplify the tree as they go: empty operands disappear, nested groups of the same
/// operator are flattened, and the negation of a comparison uses the negated comparator.
///
/// User-supplied names are always quoted as identifiers. The only way to embed SQL text is
/// [Field::unsafe_raw], which should be reserved for fragments under the application's control.
///
/// Building is side-effect free and every type is `Send + Sync`, so trees can be built and
/// rendered concurrently.
#[macro_use]
mod sql;

pub mod expression_error;

pub use sql::function;

/// Public types at the root level of this crate
pub use sql::{
    ExpressionBuilder, SQLBuilder, SQLParam, SQLParamContainer,
    assign::AssignExpression,
    column::{ColumnRef, FieldOption},
    comparison::{Comparator, Comparison},
    dialect::Dialect,
    expression::{BooleanGroup, BooleanOperator, Expression, and, not, or},
    field::{ArithmeticOperator, Field},
    leaf::Leaf,
    order::{AliasedField, OrderByElement, Ordering},
    subquery::{
        SubQuery, SubQueryOperator, Value, assign_subquery, compare_subquery, contains_subquery,
        contains_value, exists, values,
    },
};

pub use expression_error::ExpressionError;
