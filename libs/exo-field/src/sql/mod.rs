// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{any::Any, fmt::Debug};

use tokio_postgres::types::ToSql;

#[macro_use]
#[cfg(test)]
pub(crate) mod test_util;

pub mod assign;
pub mod column;
pub mod comparison;
pub mod dialect;
pub mod expression;
pub mod field;
pub mod function;
pub mod leaf;
pub mod order;
pub mod subquery;

mod expression_builder;
mod sql_builder;
mod sql_param_container;

pub use expression_builder::ExpressionBuilder;
pub use sql_builder::SQLBuilder;
pub use sql_param_container::SQLParamContainer;

/// A value that can be bound to a placeholder.
///
/// Blanket-implemented for anything `tokio-postgres` can serialize, so host values (integers,
/// strings, `Option`s, JSON values, etc.) can be used directly. The emitted parameter list can
/// be handed over to the executor as is.
pub trait SQLParam: ToSql + Send + Sync + Debug {
    fn as_any(&self) -> &dyn Any;
    fn eq(&self, other: &dyn SQLParam) -> bool;

    fn as_pg(&self) -> &(dyn ToSql + Sync);
}

impl<T: ToSql + Send + Sync + Debug + Any + PartialEq> SQLParam for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq(&self, other: &dyn SQLParam) -> bool {
        if let Some(other) = other.as_any().downcast_ref::<T>() {
            self == other
        } else {
            false
        }
    }

    fn as_pg(&self) -> &(dyn ToSql + Sync) {
        self
    }
}

impl PartialEq for dyn SQLParam {
    fn eq(&self, other: &Self) -> bool {
        SQLParam::eq(self, other)
    }
}
