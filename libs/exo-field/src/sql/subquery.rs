// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{fmt::Debug, sync::Arc};

use super::{
    ExpressionBuilder, SQLBuilder, SQLParam, SQLParamContainer,
    assign::{AssignExpression, AssignValue},
    comparison::{Comparator, Comparison, ComparisonLhs, ComparisonRhs},
    expression::Expression,
    field::Field,
};

/// A nested query used as a single operand.
///
/// The query is opaque: anything that can build itself (typically the renderer's own select
/// statement) can be embedded. It is always rendered inside parentheses by the construct that
/// embeds it.
#[derive(Clone)]
pub struct SubQuery(Arc<dyn ExpressionBuilder + Send + Sync>);

impl SubQuery {
    pub fn new(query: impl ExpressionBuilder + Send + Sync + 'static) -> Self {
        Self(Arc::new(query))
    }
}

impl Debug for SubQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SubQuery(..)")
    }
}

/// Two subqueries are the same only if they share the same query
impl PartialEq for SubQuery {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl ExpressionBuilder for SubQuery {
    fn build(&self, builder: &mut SQLBuilder) {
        self.0.build(builder)
    }
}

/// The right side of a membership test: either a literal list or a subquery, so that callers can
/// swap one for the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Value(ValueKind);

#[derive(Debug, Clone, PartialEq)]
enum ValueKind {
    /// `<param>,<param>...`
    List(Vec<SQLParamContainer>),
    /// `(<param>,<param>),(<param>,<param>)...` for tuple membership
    Rows(Vec<Vec<SQLParamContainer>>),
    SubQuery(SubQuery),
}

/// A literal list to compare against. See [`contains_value`].
pub fn values<T: SQLParam + 'static>(items: impl IntoIterator<Item = T>) -> Value {
    Value(ValueKind::List(
        items.into_iter().map(SQLParamContainer::new).collect(),
    ))
}

impl Value {
    /// A list of rows to compare a tuple of fields against
    pub fn rows<R, T>(rows: impl IntoIterator<Item = R>) -> Value
    where
        R: IntoIterator<Item = T>,
        T: SQLParam + 'static,
    {
        Value(ValueKind::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(SQLParamContainer::new).collect())
                .collect(),
        ))
    }

    /// Is this a literal list without any element? A list of rows counts as empty when every
    /// row is.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            ValueKind::List(params) => params.is_empty(),
            ValueKind::Rows(rows) => rows.iter().all(Vec::is_empty),
            ValueKind::SubQuery(_) => false,
        }
    }
}

impl From<SubQuery> for Value {
    fn from(subquery: SubQuery) -> Self {
        Value(ValueKind::SubQuery(subquery))
    }
}

impl ExpressionBuilder for Value {
    fn build(&self, builder: &mut SQLBuilder) {
        let push_params = |builder: &mut SQLBuilder, params: &Vec<SQLParamContainer>| {
            builder.push_iter(params.iter(), ",", |builder, param| {
                builder.push_param(param.param())
            });
        };

        match &self.0 {
            ValueKind::List(params) => push_params(builder, params),
            ValueKind::Rows(rows) => {
                builder.push_iter(rows.iter(), ",", |builder, row| {
                    builder.push('(');
                    push_params(builder, row);
                    builder.push(')');
                });
            }
            ValueKind::SubQuery(subquery) => subquery.build(builder),
        }
    }
}

/// Membership test against a subquery:
/// - no columns: [`Expression::Empty`]
/// - one column: `<column> IN (<subquery>)`
/// - more columns: `(<column>,<column>...) IN (<subquery>)`, in the given order
pub fn contains_subquery(columns: &[Field], subquery: SubQuery) -> Expression {
    contains_value(columns, subquery.into())
}

/// Membership test against a [`Value`], with the same column handling as
/// [`contains_subquery`]. An empty literal list also yields [`Expression::Empty`].
pub fn contains_value(columns: &[Field], value: Value) -> Expression {
    let lhs = match columns {
        [] => {
            tracing::debug!("Membership test without columns, using the empty expression");
            return Expression::Empty;
        }
        [column] => ComparisonLhs::Field(column.clone()),
        columns => ComparisonLhs::Tuple(columns.to_vec()),
    };

    if value.is_empty() {
        tracing::debug!("Membership test against an empty list, using the empty expression");
        return Expression::Empty;
    }

    Comparison::new(Comparator::In, lhs, ComparisonRhs::Value(value)).into()
}

/// Assign the result of a subquery: `"<column>" = (<subquery>)` or
/// `("<column>","<column>"...) = (<subquery>)`, each column being the base column of the given
/// field. Without columns, or with a field that has no column, the assignment renders as
/// nothing.
pub fn assign_subquery(columns: &[Field], subquery: SubQuery) -> AssignExpression {
    if columns.is_empty() {
        tracing::debug!("Subquery assignment without columns, using the empty assignment");
    }

    AssignExpression::new(columns, AssignValue::SubQuery(subquery))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubQueryOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Exists,
}

impl From<SubQueryOperator> for Comparator {
    fn from(operator: SubQueryOperator) -> Self {
        match operator {
            SubQueryOperator::Eq => Comparator::Eq,
            SubQueryOperator::Neq => Comparator::Neq,
            SubQueryOperator::Gt => Comparator::Gt,
            SubQueryOperator::Gte => Comparator::Gte,
            SubQueryOperator::Lt => Comparator::Lt,
            SubQueryOperator::Lte => Comparator::Lte,
            SubQueryOperator::Exists => Comparator::Exists,
        }
    }
}

/// Compare a column with the result of a subquery: `<column> <op> (<subquery>)`. For
/// [`SubQueryOperator::Exists`] the column is ignored: `EXISTS (<subquery>)`.
pub fn compare_subquery(operator: SubQueryOperator, column: &Field, subquery: SubQuery) -> Expression {
    let lhs = match operator {
        SubQueryOperator::Exists => ComparisonLhs::None,
        _ => ComparisonLhs::Field(column.clone()),
    };

    Comparison::new(
        operator.into(),
        lhs,
        ComparisonRhs::Value(subquery.into()),
    )
    .into()
}

/// `EXISTS (<subquery>)`
pub fn exists(subquery: SubQuery) -> Expression {
    Comparison::new(
        Comparator::Exists,
        ComparisonLhs::None,
        ComparisonRhs::Value(subquery.into()),
    )
    .into()
}
