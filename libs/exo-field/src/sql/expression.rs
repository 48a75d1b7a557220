// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ExpressionBuilder, SQLBuilder, comparison::Comparison, field::Field, leaf::Leaf};

/// A node of a predicate tree, typically used in a `WHERE` or `HAVING` clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Expression {
    /// The neutral expression. Renders as nothing and disappears when combined with others.
    #[default]
    Empty,
    /// A literal SQL fragment with its parameters
    Leaf(Leaf),
    /// A field used as a predicate (for example, a boolean column)
    Field(Field),
    /// AND, OR, or NOT over other expressions
    Boolean(BooleanGroup),
    /// A relational test between a field and an operand
    Comparison(Comparison),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperator {
    And,
    Or,
    Not,
}

/// Prefer [`and`], [`or`], and [`not`] (or `!`), which flatten and simplify the group.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanGroup {
    operator: BooleanOperator,
    children: Vec<Expression>,
}

impl BooleanGroup {
    pub fn operator(&self) -> BooleanOperator {
        self.operator
    }

    pub fn children(&self) -> &[Expression] {
        &self.children
    }

    /// Does this group render its own surrounding parentheses?
    fn is_parenthesized(&self) -> bool {
        self.operator != BooleanOperator::Not && self.children.len() > 1
    }
}

/// Logical AND of all `exprs`: `(<a> AND <b> AND ...)`.
///
/// Empty expressions are dropped and nested AND groups are flattened into this one. With no
/// remaining operands, the result is [`Expression::Empty`]; with one, it is that operand.
pub fn and(exprs: impl IntoIterator<Item = Expression>) -> Expression {
    combine(BooleanOperator::And, exprs)
}

/// Logical OR of all `exprs`: `(<a> OR <b> OR ...)`. Simplified the same way as [`and`].
pub fn or(exprs: impl IntoIterator<Item = Expression>) -> Expression {
    combine(BooleanOperator::Or, exprs)
}

/// Negation of the conjunction of `exprs`. A single comparison is rewritten with the negated
/// comparator (`NOT (a = 1)` becomes `a <> 1`); anything else is wrapped as `NOT (...)`.
pub fn not(exprs: impl IntoIterator<Item = Expression>) -> Expression {
    !and(exprs)
}

fn combine(operator: BooleanOperator, exprs: impl IntoIterator<Item = Expression>) -> Expression {
    let mut children = vec![];

    for expr in exprs {
        match expr {
            Expression::Empty => {}
            Expression::Boolean(group) if group.operator == operator => {
                children.extend(group.children)
            }
            expr => children.push(expr),
        }
    }

    if children.len() > 1 {
        Expression::Boolean(BooleanGroup { operator, children })
    } else {
        children.pop().unwrap_or_default()
    }
}

impl Expression {
    pub fn is_empty(&self) -> bool {
        matches!(self, Expression::Empty)
    }

    /// Logical AND of two expressions. See [`and`].
    pub fn and(self, other: Expression) -> Expression {
        and([self, other])
    }

    /// Logical OR of two expressions. See [`or`].
    pub fn or(self, other: Expression) -> Expression {
        or([self, other])
    }
}

impl std::ops::Not for Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        match self {
            // Reduced to a simpler form when possible, else fall back to a NOT group
            Expression::Empty => Expression::Empty,
            Expression::Comparison(comparison) => Expression::Comparison(comparison.negate()),
            Expression::Boolean(group) if group.operator == BooleanOperator::Not => {
                and(group.children)
            }
            expr => Expression::Boolean(BooleanGroup {
                operator: BooleanOperator::Not,
                children: vec![expr],
            }),
        }
    }
}

impl ExpressionBuilder for Expression {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Expression::Empty => {}
            Expression::Leaf(leaf) => leaf.build(builder),
            Expression::Field(field) => field.build(builder),
            Expression::Boolean(group) => group.build(builder),
            Expression::Comparison(comparison) => comparison.build(builder),
        }
    }
}

impl ExpressionBuilder for BooleanGroup {
    fn build(&self, builder: &mut SQLBuilder) {
        match self.operator {
            BooleanOperator::And => logical_combine(&self.children, "AND", builder),
            BooleanOperator::Or => logical_combine(&self.children, "OR", builder),
            BooleanOperator::Not => {
                builder.push_str("NOT ");
                match self.children.as_slice() {
                    [Expression::Boolean(group)] if group.is_parenthesized() => {
                        group.build(builder)
                    }
                    children => {
                        builder.push('(');
                        builder.push_elems(children, " AND ");
                        builder.push(')');
                    }
                }
            }
        }
    }
}

/// Combine expressions with a logical operator, parenthesizing the group if it has more than one
/// element.
fn logical_combine(children: &[Expression], op: &'static str, builder: &mut SQLBuilder) {
    match children {
        [child] => child.build(builder),
        children => {
            builder.push('(');
            builder.push_iter(children.iter(), &format!(" {op} "), |builder, child| {
                child.build(builder)
            });
            builder.push(')');
        }
    }
}
