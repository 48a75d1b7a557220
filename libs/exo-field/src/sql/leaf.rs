// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::expression_error::ExpressionError;

use super::{ExpressionBuilder, SQLBuilder, SQLParamContainer};

const PLACEHOLDER: char = '?';

/// A literal SQL template with positional parameters. Each `?` in the template is replaced by the
/// dialect's placeholder for the parameter at the same position.
///
/// A leaf always has exactly as many parameters as placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    template: String,
    params: Vec<SQLParamContainer>,
}

impl Leaf {
    /// Create a leaf from caller-supplied SQL. Reachable only through
    /// [`Field::unsafe_raw`](super::field::Field::unsafe_raw).
    pub(crate) fn new(
        template: impl Into<String>,
        params: Vec<SQLParamContainer>,
    ) -> Result<Self, ExpressionError> {
        let template = template.into();
        let placeholders = placeholder_count(&template);

        if placeholders != params.len() {
            return Err(ExpressionError::PlaceholderMismatch {
                placeholders,
                params: params.len(),
            });
        }

        Ok(Self { template, params })
    }

    /// Create a leaf from one of our own templates
    pub(crate) fn from_template(template: &'static str, params: Vec<SQLParamContainer>) -> Self {
        debug_assert_eq!(placeholder_count(template), params.len());

        Self {
            template: template.to_string(),
            params,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> &[SQLParamContainer] {
        &self.params
    }
}

fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

impl ExpressionBuilder for Leaf {
    fn build(&self, builder: &mut SQLBuilder) {
        let mut params = self.params.iter();

        for (index, fragment) in self.template.split(PLACEHOLDER).enumerate() {
            if index > 0 {
                if let Some(param) = params.next() {
                    builder.push_param(param.param());
                }
            }
            builder.push_str(fragment);
        }
    }
}

#[cfg(test)]
mod tests {
    use multiplatform_test::multiplatform_test;

    use super::*;

    #[multiplatform_test]
    fn params_replace_placeholders_in_order() {
        let leaf = Leaf::new(
            "FROM_UNIXTIME(?, ?) > ?",
            vec![
                SQLParamContainer::new(1_700_000_000i64),
                SQLParamContainer::new("%Y"),
                SQLParamContainer::new("2024"),
            ],
        )
        .unwrap();

        assert_binding!(
            leaf.to_sql(),
            "FROM_UNIXTIME($1, $2) > $3",
            1_700_000_000i64,
            "%Y",
            "2024"
        );
    }

    #[multiplatform_test]
    fn placeholder_mismatch() {
        assert_eq!(
            Leaf::new("? = ?", vec![SQLParamContainer::new(1)]),
            Err(ExpressionError::PlaceholderMismatch {
                placeholders: 2,
                params: 1
            })
        );

        assert_eq!(
            Leaf::new("COUNT(*)", vec![SQLParamContainer::new(1)]),
            Err(ExpressionError::PlaceholderMismatch {
                placeholders: 0,
                params: 1
            })
        );
    }

    #[multiplatform_test]
    fn template_without_placeholders() {
        let leaf = Leaf::new("COUNT(*)", vec![]).unwrap();
        assert_binding!(leaf.to_sql(), "COUNT(*)");
    }
}
