// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use super::{ExpressionBuilder, SQLParam, dialect::Dialect};

/// The accumulating context for a single render pass. Collects the SQL text and, in lockstep,
/// the parameters for each placeholder pushed into the text.
pub struct SQLBuilder {
    /// The SQL being built with placeholders for each parameter
    sql: String,
    /// The list of parameters
    params: Vec<Arc<dyn SQLParam>>,
    /// Controls identifier quoting and placeholder style
    dialect: Dialect,
    /// Indicates if column name should be rendered with the table name i.e. "table"."col"  instead
    /// of "col" (assignment targets need the latter)
    fully_qualify_column_names: bool,
}

impl Default for SQLBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SQLBuilder {
    pub fn new() -> Self {
        Self::with_dialect(Dialect::default())
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            fully_qualify_column_names: true,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Push a string
    pub fn push_str<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push_str(s.as_ref());
    }

    /// Push a character
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Push an identifier (table name, column name, alias) surrounded by the dialect's quote
    /// character. Any quote character inside the identifier is doubled, so a user-supplied name
    /// can never terminate the identifier early.
    pub fn push_identifier<T: AsRef<str>>(&mut self, s: T) {
        let quote = self.dialect.identifier_quote();
        self.sql.push(quote);
        for c in s.as_ref().chars() {
            if c == quote {
                self.sql.push(quote);
            }
            self.sql.push(c);
        }
        self.sql.push(quote);
    }

    /// Push a column. Push `<schema>.<table>.<column>` (with the schema and table parts only if
    /// present) if in fully_qualify_column_names mode, otherwise just `<column>`. See
    /// [`SQLBuilder::without_fully_qualified_column_names`].
    pub fn push_column(&mut self, schema: Option<&str>, table: Option<&str>, column: &str) {
        if self.fully_qualify_column_names {
            if let Some(table) = table {
                if let Some(schema) = schema {
                    self.push_identifier(schema);
                    self.push('.');
                }
                self.push_identifier(table);
                self.push('.');
            }
        }
        self.push_identifier(column);
    }

    /// Push a space. This is a common operation, so it is provided as a separate method.
    pub fn push_space(&mut self) {
        self.sql.push(' ');
    }

    /// Push a parameter, which will be replaced with a placeholder in the SQL string
    /// and the parameter will be added to the list of parameters.
    pub fn push_param(&mut self, param: Arc<dyn SQLParam>) {
        self.params.push(param);
        let placeholder = self.dialect.placeholder(self.params.len());
        self.push_str(placeholder);
    }

    /// Push elements of an iterator, separated by `sep`. The `push_elem` function provides
    /// the flexibility to map the elements (compared to [`SQLBuilder::push_elems`], which assumes that
    /// the elements implement [`ExpressionBuilder`] and [`build`](ExpressionBuilder::build) is all you need to call).
    pub fn push_iter<T>(
        &mut self,
        iter: impl ExactSizeIterator<Item = T>,
        sep: &str,
        push_elem: impl Fn(&mut Self, T),
    ) {
        let len = iter.len();
        for (i, item) in iter.enumerate() {
            push_elem(self, item);

            if i < len - 1 {
                self.sql.push_str(sep);
            }
        }
    }

    /// Push elements of a slice, separated by `sep`. The elements must themselves implement
    /// `ExpressionBuilder`. This is a convenience method that encodes the common pattern of
    /// building a list of expressions and separating them by a separator.
    pub fn push_elems<T: ExpressionBuilder>(&mut self, elems: &[T], sep: &str) {
        self.push_iter(elems.iter(), sep, |builder, elem| {
            elem.build(builder);
        });
    }

    /// Get the SQL string and the list of parameters. Calling this method should be the final step
    /// in building an SQL expression, and thus this builder consumes the `self`.
    pub fn into_sql(self) -> (String, Vec<Arc<dyn SQLParam>>) {
        tracing::trace!(sql = %self.sql, params = self.params.len(), "Built expression");
        (self.sql, self.params)
    }

    /// Execute the given function with the [`Self::fully_qualify_column_names`] flag set to false.
    /// This is useful for building SQL expressions that need to be rendered without the table name,
    /// e.g. for assignment targets. This takes a closure, so that we can restore the original value
    /// of the flag after executing the function.
    pub fn without_fully_qualified_column_names<F, R>(&mut self, func: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let cur_fully_qualify_column_names = self.fully_qualify_column_names;
        self.fully_qualify_column_names = false;
        let ret = func(self);
        self.fully_qualify_column_names = cur_fully_qualify_column_names;
        ret
    }
}
