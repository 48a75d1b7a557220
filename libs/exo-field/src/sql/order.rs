// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ExpressionBuilder, SQLBuilder, field::Field};

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Ordering {
    Asc,
    Desc,
}

/// A field in an `ORDER BY` clause: `<field> ASC|DESC`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement(Field, Ordering);

impl OrderByElement {
    pub fn new(field: Field, ordering: Ordering) -> Self {
        Self(field, ordering)
    }

    pub fn field(&self) -> &Field {
        &self.0
    }

    pub fn ordering(&self) -> Ordering {
        self.1
    }
}

impl ExpressionBuilder for OrderByElement {
    fn build(&self, builder: &mut SQLBuilder) {
        self.0.build(builder);
        builder.push_space();

        if self.1 == Ordering::Asc {
            builder.push_str("ASC");
        } else {
            builder.push_str("DESC");
        }
    }
}

/// A field with an output alias in a projection: `<field> AS "<alias>"`.
///
/// The alias is always quoted as an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedField {
    field: Field,
    alias: String,
}

impl AliasedField {
    pub fn new(field: Field, alias: String) -> Self {
        Self { field, alias }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl ExpressionBuilder for AliasedField {
    fn build(&self, builder: &mut SQLBuilder) {
        self.field.build(builder);
        builder.push_str(" AS ");
        builder.push_identifier(&self.alias);
    }
}
