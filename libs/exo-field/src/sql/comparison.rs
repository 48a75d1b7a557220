// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    ExpressionBuilder, SQLBuilder, SQLParamContainer, expression::Expression, field::Field,
    subquery::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
    Exists,
    NotExists,
}

impl Comparator {
    /// The comparator that holds exactly when `self` does not
    pub fn negate(self) -> Self {
        match self {
            Comparator::Eq => Comparator::Neq,
            Comparator::Neq => Comparator::Eq,
            Comparator::Gt => Comparator::Lte,
            Comparator::Lte => Comparator::Gt,
            Comparator::Gte => Comparator::Lt,
            Comparator::Lt => Comparator::Gte,
            Comparator::Like => Comparator::NotLike,
            Comparator::NotLike => Comparator::Like,
            Comparator::In => Comparator::NotIn,
            Comparator::NotIn => Comparator::In,
            Comparator::Between => Comparator::NotBetween,
            Comparator::NotBetween => Comparator::Between,
            Comparator::IsNull => Comparator::IsNotNull,
            Comparator::IsNotNull => Comparator::IsNull,
            Comparator::Exists => Comparator::NotExists,
            Comparator::NotExists => Comparator::Exists,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Neq => "<>",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Like => "LIKE",
            Comparator::NotLike => "NOT LIKE",
            Comparator::In => "IN",
            Comparator::NotIn => "NOT IN",
            Comparator::Between => "BETWEEN",
            Comparator::NotBetween => "NOT BETWEEN",
            Comparator::IsNull => "IS NULL",
            Comparator::IsNotNull => "IS NOT NULL",
            Comparator::Exists => "EXISTS",
            Comparator::NotExists => "NOT EXISTS",
        }
    }
}

/// The left side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ComparisonLhs {
    /// `EXISTS (...)` has no left operand
    None,
    Field(Field),
    /// `(<field>,<field>...)` in the order supplied
    Tuple(Vec<Field>),
}

/// The right side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ComparisonRhs {
    /// `IS NULL` and `IS NOT NULL` have no right operand
    None,
    Param(SQLParamContainer),
    /// `(<param>,<param>...)`
    List(Vec<SQLParamContainer>),
    /// `<param> AND <param>`
    Range(SQLParamContainer, SQLParamContainer),
    Field(Field),
    /// `(<subquery or literal list>)`
    Value(Value),
}

/// A relational test: `<left> <comparator> <right>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    comparator: Comparator,
    lhs: ComparisonLhs,
    rhs: ComparisonRhs,
}

impl Comparison {
    pub(crate) fn new(comparator: Comparator, lhs: ComparisonLhs, rhs: ComparisonRhs) -> Self {
        Self {
            comparator,
            lhs,
            rhs,
        }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub(crate) fn negate(self) -> Self {
        Self {
            comparator: self.comparator.negate(),
            ..self
        }
    }
}

impl From<Comparison> for Expression {
    fn from(comparison: Comparison) -> Self {
        Expression::Comparison(comparison)
    }
}

impl ExpressionBuilder for Comparison {
    fn build(&self, builder: &mut SQLBuilder) {
        match &self.lhs {
            ComparisonLhs::None => {}
            ComparisonLhs::Field(field) => {
                field.build(builder);
                builder.push_space();
            }
            ComparisonLhs::Tuple(fields) => {
                builder.push('(');
                builder.push_elems(fields, ",");
                builder.push(')');
                builder.push_space();
            }
        }

        builder.push_str(self.comparator.sql());

        match &self.rhs {
            ComparisonRhs::None => {}
            ComparisonRhs::Param(param) => {
                builder.push_space();
                builder.push_param(param.param());
            }
            ComparisonRhs::List(params) => {
                builder.push_str(" (");
                builder.push_iter(params.iter(), ",", |builder, param| {
                    builder.push_param(param.param())
                });
                builder.push(')');
            }
            ComparisonRhs::Range(low, high) => {
                builder.push_space();
                builder.push_param(low.param());
                builder.push_str(" AND ");
                builder.push_param(high.param());
            }
            ComparisonRhs::Field(field) => {
                builder.push_space();
                field.build(builder);
            }
            ComparisonRhs::Value(value) => {
                builder.push_str(" (");
                value.build(builder);
                builder.push(')');
            }
        }
    }
}
