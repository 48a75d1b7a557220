// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    ExpressionBuilder, SQLBuilder, SQLParamContainer, column::ColumnRef, field::Field,
    subquery::SubQuery,
};

/// A target-value pair for the `SET` clause of an update.
///
/// Targets are the base columns of the assigned fields (`"age"` for `age + 1` or `SUM(age)`), and
/// are always rendered without a table or schema qualifier, as most databases reject a qualified
/// column there.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpression {
    targets: Vec<ColumnRef>,
    value: AssignValue,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AssignValue {
    Param(SQLParamContainer),
    Field(Field),
    SubQuery(SubQuery),
}

impl AssignExpression {
    /// Assign `value` to the base columns of `fields`, in order.
    ///
    /// A field without a base column (raw SQL, a function such as `RAND()`, or `*`) cannot be
    /// assigned to; if any is present, the assignment has no targets and renders as nothing.
    pub(crate) fn new(fields: &[Field], value: AssignValue) -> Self {
        let targets = fields
            .iter()
            .map(|field| field.base_column().filter(|column| !column.is_raw()).cloned())
            .collect::<Option<Vec<_>>>()
            .unwrap_or_else(|| {
                tracing::warn!(
                    ?fields,
                    "Assignment to a field without a column, using the empty assignment"
                );
                vec![]
            });

        Self { targets, value }
    }

    pub fn targets(&self) -> &[ColumnRef] {
        &self.targets
    }

    /// An assignment without targets, which renders as nothing
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl ExpressionBuilder for AssignExpression {
    fn build(&self, builder: &mut SQLBuilder) {
        if self.targets.is_empty() {
            return;
        }

        builder.without_fully_qualified_column_names(|builder| match self.targets.as_slice() {
            [target] => target.build(builder),
            targets => {
                builder.push('(');
                builder.push_elems(targets, ",");
                builder.push(')');
            }
        });

        builder.push_str(" = ");

        match &self.value {
            AssignValue::Param(param) => builder.push_param(param.param()),
            AssignValue::Field(field) => field.build(builder),
            AssignValue::SubQuery(subquery) => {
                builder.push('(');
                subquery.build(builder);
                builder.push(')');
            }
        }
    }
}
