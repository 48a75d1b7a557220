// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::expression_error::ExpressionError;

use super::{
    ExpressionBuilder, SQLBuilder, SQLParam, SQLParamContainer,
    assign::{AssignExpression, AssignValue},
    column::{ColumnRef, FieldOption},
    comparison::{Comparator, Comparison, ComparisonLhs, ComparisonRhs},
    expression::Expression,
    leaf::Leaf,
    order::{AliasedField, OrderByElement, Ordering},
};

/// A column (or a value computed from columns) along with the operations that can be applied to
/// it.
///
/// A field is an immutable value: every operation returns a new [`Field`] (arithmetic,
/// aggregates, etc.), a new [`Expression`] (comparisons), or a new presentation/assignment
/// wrapper, leaving `self` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Field(FieldExpr);

#[derive(Debug, Clone, PartialEq)]
enum FieldExpr {
    Column(ColumnRef),
    /// Caller-supplied SQL or one of the [`function`](super::function) templates
    Leaf(Leaf),
    /// `<lhs> <operator> <rhs>`
    Arithmetic {
        lhs: Box<Field>,
        operator: ArithmeticOperator,
        rhs: Operand,
    },
    /// `<function>(<arg>,<arg>...)`
    Call {
        function: &'static str,
        args: Vec<Operand>,
    },
    /// `DISTINCT <field>`
    Distinct(Box<Field>),
    /// `(<field>)`
    Grouped(Box<Field>),
}

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Param(SQLParamContainer),
    Field(Box<Field>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithmeticOperator {
    fn sql(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Sub => "-",
            ArithmeticOperator::Mul => "*",
            ArithmeticOperator::Div => "/",
            ArithmeticOperator::Mod => "%",
        }
    }
}

impl Field {
    /// A field for `<table>.<column>`. An empty table name creates an unqualified column.
    pub fn new(table: &str, column: &str) -> Self {
        Self::with_options(table, column, &[])
    }

    pub fn with_options(table: &str, column: &str, options: &[FieldOption]) -> Self {
        Self(FieldExpr::Column(ColumnRef::new(table, column, options)))
    }

    /// The `*` column, as in `COUNT(*)`
    pub fn star() -> Self {
        Self(FieldExpr::Column(ColumnRef::star()))
    }

    /// Create a field from native SQL. Each `?` in `sql` is a placeholder for the parameter at
    /// the same position.
    ///
    /// **Warning**: this is the only place where caller-supplied SQL text enters an expression
    /// tree, and the text is emitted verbatim. Interpolating untrusted input into `sql` exposes
    /// the application to SQL injection. Pass values through `params` instead, and prefer
    /// [`Field::new`] and its operations whenever they can express the intent.
    pub fn unsafe_raw(
        sql: impl Into<String>,
        params: impl IntoIterator<Item = SQLParamContainer>,
    ) -> Result<Self, ExpressionError> {
        Ok(Self(FieldExpr::Leaf(Leaf::new(
            sql,
            params.into_iter().collect(),
        )?)))
    }

    pub(crate) fn from_leaf(leaf: Leaf) -> Self {
        Self(FieldExpr::Leaf(leaf))
    }

    /// The column this field refers to, if it is a plain column
    pub fn column(&self) -> Option<&ColumnRef> {
        match &self.0 {
            FieldExpr::Column(column) => Some(column),
            _ => None,
        }
    }

    /// The column a computed field derives from: `age` for `age + 1`, `SUM(age)`, or
    /// `(age) * (price)`. Raw SQL and functions have none.
    pub fn base_column(&self) -> Option<&ColumnRef> {
        match &self.0 {
            FieldExpr::Column(column) => Some(column),
            FieldExpr::Leaf(_) => None,
            FieldExpr::Arithmetic { lhs, .. } => lhs.base_column(),
            FieldExpr::Call { args, .. } => match args.first() {
                Some(Operand::Field(field)) => field.base_column(),
                _ => None,
            },
            FieldExpr::Distinct(field) | FieldExpr::Grouped(field) => field.base_column(),
        }
    }

    // Comparisons

    pub fn eq<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Eq, value)
    }

    pub fn neq<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Neq, value)
    }

    pub fn gt<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Gt, value)
    }

    pub fn gte<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Gte, value)
    }

    pub fn lt<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Lt, value)
    }

    pub fn lte<T: SQLParam + 'static>(&self, value: T) -> Expression {
        self.compare(Comparator::Lte, value)
    }

    pub fn like<T: SQLParam + 'static>(&self, pattern: T) -> Expression {
        self.compare(Comparator::Like, pattern)
    }

    pub fn not_like<T: SQLParam + 'static>(&self, pattern: T) -> Expression {
        !self.like(pattern)
    }

    /// `<field> IN (<values>)`.
    ///
    /// With no values at all, this is [`Expression::Empty`], which renders as nothing (and is
    /// dropped by [`and`](super::expression::and)/[`or`](super::expression::or)), rather than
    /// a predicate matching no rows.
    pub fn in_list<T: SQLParam + 'static>(&self, values: impl IntoIterator<Item = T>) -> Expression {
        let values: Vec<_> = values.into_iter().map(SQLParamContainer::new).collect();

        if values.is_empty() {
            tracing::debug!(field = ?self, "Empty IN list, using the empty expression");
            return Expression::Empty;
        }

        self.comparison(Comparator::In, ComparisonRhs::List(values))
    }

    /// The negation of [`Field::in_list`]: `<field> NOT IN (<values>)`
    pub fn not_in_list<T: SQLParam + 'static>(
        &self,
        values: impl IntoIterator<Item = T>,
    ) -> Expression {
        !self.in_list(values)
    }

    /// `<field> BETWEEN <low> AND <high>`
    pub fn between<L: SQLParam + 'static, H: SQLParam + 'static>(
        &self,
        low: L,
        high: H,
    ) -> Expression {
        self.comparison(
            Comparator::Between,
            ComparisonRhs::Range(SQLParamContainer::new(low), SQLParamContainer::new(high)),
        )
    }

    pub fn not_between<L: SQLParam + 'static, H: SQLParam + 'static>(
        &self,
        low: L,
        high: H,
    ) -> Expression {
        !self.between(low, high)
    }

    pub fn is_null(&self) -> Expression {
        self.comparison(Comparator::IsNull, ComparisonRhs::None)
    }

    pub fn is_not_null(&self) -> Expression {
        self.comparison(Comparator::IsNotNull, ComparisonRhs::None)
    }

    fn compare<T: SQLParam + 'static>(&self, comparator: Comparator, value: T) -> Expression {
        self.comparison(
            comparator,
            ComparisonRhs::Param(SQLParamContainer::new(value)),
        )
    }

    fn comparison(&self, comparator: Comparator, rhs: ComparisonRhs) -> Expression {
        Comparison::new(comparator, ComparisonLhs::Field(self.clone()), rhs).into()
    }

    // Arithmetic and aggregates

    pub fn add<T: SQLParam + 'static>(&self, value: T) -> Field {
        self.arithmetic(ArithmeticOperator::Add, value)
    }

    pub fn sub<T: SQLParam + 'static>(&self, value: T) -> Field {
        self.arithmetic(ArithmeticOperator::Sub, value)
    }

    pub fn mul<T: SQLParam + 'static>(&self, value: T) -> Field {
        self.arithmetic(ArithmeticOperator::Mul, value)
    }

    pub fn div<T: SQLParam + 'static>(&self, value: T) -> Field {
        self.arithmetic(ArithmeticOperator::Div, value)
    }

    pub fn modulo<T: SQLParam + 'static>(&self, value: T) -> Field {
        self.arithmetic(ArithmeticOperator::Mod, value)
    }

    pub fn sum(&self) -> Field {
        self.call("SUM")
    }

    pub fn avg(&self) -> Field {
        self.call("AVG")
    }

    pub fn min(&self) -> Field {
        self.call("MIN")
    }

    pub fn max(&self) -> Field {
        self.call("MAX")
    }

    pub fn count(&self) -> Field {
        self.call("COUNT")
    }

    pub fn distinct(&self) -> Field {
        Self(FieldExpr::Distinct(Box::new(self.clone())))
    }

    /// `IFNULL(<field>,<value>)`
    pub fn if_null<T: SQLParam + 'static>(&self, value: T) -> Field {
        Self(FieldExpr::Call {
            function: "IFNULL",
            args: vec![
                Operand::Field(Box::new(self.clone())),
                Operand::Param(SQLParamContainer::new(value)),
            ],
        })
    }

    /// `FIELD(<field>,<values>...)`: the 1-based position of the field's value in `values` (0
    /// if absent). Typically used to order rows in a caller-defined sequence.
    pub fn position_in<T: SQLParam + 'static>(&self, values: impl IntoIterator<Item = T>) -> Field {
        let args = std::iter::once(Operand::Field(Box::new(self.clone())))
            .chain(
                values
                    .into_iter()
                    .map(|value| Operand::Param(SQLParamContainer::new(value))),
            )
            .collect();

        Self(FieldExpr::Call {
            function: "FIELD",
            args,
        })
    }

    fn arithmetic<T: SQLParam + 'static>(&self, operator: ArithmeticOperator, value: T) -> Field {
        // Chained arithmetic keeps its evaluation order: ("a" + $1) * $2. Raw SQL may itself be
        // an operation, so it is grouped the same way.
        let lhs = match &self.0 {
            FieldExpr::Arithmetic { .. } | FieldExpr::Leaf(_) => self.grouped(),
            _ => self.clone(),
        };

        Self(FieldExpr::Arithmetic {
            lhs: Box::new(lhs),
            operator,
            rhs: Operand::Param(SQLParamContainer::new(value)),
        })
    }

    fn call(&self, function: &'static str) -> Field {
        Self(FieldExpr::Call {
            function,
            args: vec![Operand::Field(Box::new(self.clone()))],
        })
    }

    fn grouped(&self) -> Field {
        Self(FieldExpr::Grouped(Box::new(self.clone())))
    }

    // Column-to-column operations. Each operand is parenthesized independently of its own
    // structure.

    pub fn eq_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Eq, other)
    }

    pub fn neq_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Neq, other)
    }

    pub fn gt_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Gt, other)
    }

    pub fn gte_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Gte, other)
    }

    pub fn lt_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Lt, other)
    }

    pub fn lte_col(&self, other: &Field) -> Expression {
        self.compare_col(Comparator::Lte, other)
    }

    pub fn add_col(&self, other: &Field) -> Field {
        self.arithmetic_col(ArithmeticOperator::Add, other)
    }

    pub fn sub_col(&self, other: &Field) -> Field {
        self.arithmetic_col(ArithmeticOperator::Sub, other)
    }

    pub fn mul_col(&self, other: &Field) -> Field {
        self.arithmetic_col(ArithmeticOperator::Mul, other)
    }

    pub fn div_col(&self, other: &Field) -> Field {
        self.arithmetic_col(ArithmeticOperator::Div, other)
    }

    /// `CONCAT((<field>),(<other>))`
    pub fn concat_col(&self, other: &Field) -> Field {
        Self(FieldExpr::Call {
            function: "CONCAT",
            args: vec![
                Operand::Field(Box::new(self.grouped())),
                Operand::Field(Box::new(other.grouped())),
            ],
        })
    }

    fn compare_col(&self, comparator: Comparator, other: &Field) -> Expression {
        Comparison::new(
            comparator,
            ComparisonLhs::Field(self.grouped()),
            ComparisonRhs::Field(other.grouped()),
        )
        .into()
    }

    fn arithmetic_col(&self, operator: ArithmeticOperator, other: &Field) -> Field {
        Self(FieldExpr::Arithmetic {
            lhs: Box::new(self.grouped()),
            operator,
            rhs: Operand::Field(Box::new(other.grouped())),
        })
    }

    // Presentation

    pub fn asc(&self) -> OrderByElement {
        OrderByElement::new(self.clone(), Ordering::Asc)
    }

    pub fn desc(&self) -> OrderByElement {
        OrderByElement::new(self.clone(), Ordering::Desc)
    }

    /// `<field> AS "<alias>"`
    pub fn alias(&self, alias: impl Into<String>) -> AliasedField {
        AliasedField::new(self.clone(), alias.into())
    }

    // Assignment

    /// `"<column>" = <value>` for the `SET` clause of an update
    pub fn value<T: SQLParam + 'static>(&self, value: T) -> AssignExpression {
        AssignExpression::new(
            std::slice::from_ref(self),
            AssignValue::Param(SQLParamContainer::new(value)),
        )
    }

    /// `"<column>" = <field>`, e.g. `"age" = "people"."age" + $1`
    pub fn value_field(&self, value: &Field) -> AssignExpression {
        AssignExpression::new(std::slice::from_ref(self), AssignValue::Field(value.clone()))
    }
}

impl From<Field> for Expression {
    fn from(field: Field) -> Self {
        match field.0 {
            FieldExpr::Leaf(leaf) => Expression::Leaf(leaf),
            field_expr => Expression::Field(Field(field_expr)),
        }
    }
}

impl ExpressionBuilder for Field {
    fn build(&self, builder: &mut SQLBuilder) {
        match &self.0 {
            FieldExpr::Column(column) => column.build(builder),
            FieldExpr::Leaf(leaf) => leaf.build(builder),
            FieldExpr::Arithmetic { lhs, operator, rhs } => {
                lhs.build(builder);
                builder.push_space();
                builder.push_str(operator.sql());
                builder.push_space();
                rhs.build(builder);
            }
            FieldExpr::Call { function, args } => {
                builder.push_str(function);
                builder.push('(');
                builder.push_elems(args, ",");
                builder.push(')');
            }
            FieldExpr::Distinct(field) => {
                builder.push_str("DISTINCT ");
                field.build(builder);
            }
            FieldExpr::Grouped(field) => {
                builder.push('(');
                field.build(builder);
                builder.push(')');
            }
        }
    }
}

impl ExpressionBuilder for Operand {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Operand::Param(param) => builder.push_param(param.param()),
            Operand::Field(field) => field.build(builder),
        }
    }
}

#[cfg(test)]
mod tests {
    use multiplatform_test::multiplatform_test;

    use super::*;

    #[multiplatform_test]
    fn relational_comparisons() {
        let age = Field::new("users", "age");

        assert_binding!(age.eq(18).to_sql(), r#""users"."age" = $1"#, 18);
        assert_binding!(age.neq(18).to_sql(), r#""users"."age" <> $1"#, 18);
        assert_binding!(age.gt(18).to_sql(), r#""users"."age" > $1"#, 18);
        assert_binding!(age.gte(18).to_sql(), r#""users"."age" >= $1"#, 18);
        assert_binding!(age.lt(18).to_sql(), r#""users"."age" < $1"#, 18);
        assert_binding!(age.lte(18).to_sql(), r#""users"."age" <= $1"#, 18);

        let price = Field::new("products", "price");
        assert_binding!(price.lt(100.0).to_sql(), r#""products"."price" < $1"#, 100.0);
    }

    #[multiplatform_test]
    fn like() {
        let name = Field::new("users", "name");

        assert_binding!(name.like("John%").to_sql(), r#""users"."name" LIKE $1"#, "John%");
        assert_binding!(
            name.not_like("John%").to_sql(),
            r#""users"."name" NOT LIKE $1"#,
            "John%"
        );
    }

    #[multiplatform_test]
    fn in_list() {
        let status = Field::new("orders", "status");

        assert_binding!(
            status.in_list([1, 2, 3]).to_sql(),
            r#""orders"."status" IN ($1,$2,$3)"#,
            1,
            2,
            3
        );
        assert_binding!(
            status.not_in_list([1, 2]).to_sql(),
            r#""orders"."status" NOT IN ($1,$2)"#,
            1,
            2
        );
    }

    #[multiplatform_test]
    fn empty_in_list_is_the_empty_expression() {
        let status = Field::new("orders", "status");

        let in_list = status.in_list(Vec::<i32>::new());
        assert_eq!(in_list, Expression::Empty);
        assert_binding!(in_list.to_sql(), "");

        let not_in_list = status.not_in_list(Vec::<i32>::new());
        assert_eq!(not_in_list, Expression::Empty);
    }

    #[multiplatform_test]
    fn between() {
        let age = Field::new("users", "age");

        assert_binding!(
            age.between(18, 65).to_sql(),
            r#""users"."age" BETWEEN $1 AND $2"#,
            18,
            65
        );
        assert_binding!(
            age.not_between(18, 65).to_sql(),
            r#""users"."age" NOT BETWEEN $1 AND $2"#,
            18,
            65
        );
    }

    #[multiplatform_test]
    fn null_checks() {
        let name = Field::new("users", "name");

        assert_binding!(name.is_null().to_sql(), r#""users"."name" IS NULL"#);
        assert_binding!(name.is_not_null().to_sql(), r#""users"."name" IS NOT NULL"#);
    }

    #[multiplatform_test]
    fn arithmetic() {
        let age = Field::new("users", "age");

        assert_binding!(age.add(1).to_sql(), r#""users"."age" + $1"#, 1);
        assert_binding!(age.sub(1).to_sql(), r#""users"."age" - $1"#, 1);
        assert_binding!(age.mul(2).to_sql(), r#""users"."age" * $1"#, 2);
        assert_binding!(age.div(2).to_sql(), r#""users"."age" / $1"#, 2);
        assert_binding!(age.modulo(7).to_sql(), r#""users"."age" % $1"#, 7);
    }

    #[multiplatform_test]
    fn chained_arithmetic_keeps_evaluation_order() {
        let age = Field::new("users", "age");

        assert_binding!(
            age.add(1).mul(2).to_sql(),
            r#"("users"."age" + $1) * $2"#,
            1,
            2
        );
        assert_binding!(
            age.add(1).gt(30).to_sql(),
            r#""users"."age" + $1 > $2"#,
            1,
            30
        );
    }

    #[multiplatform_test]
    fn aggregates() {
        let price = Field::new("products", "price");

        assert_binding!(price.sum().to_sql(), r#"SUM("products"."price")"#);
        assert_binding!(price.avg().to_sql(), r#"AVG("products"."price")"#);
        assert_binding!(price.min().to_sql(), r#"MIN("products"."price")"#);
        assert_binding!(price.max().to_sql(), r#"MAX("products"."price")"#);
        assert_binding!(
            Field::new("users", "id").count().to_sql(),
            r#"COUNT("users"."id")"#
        );
        assert_binding!(Field::star().count().to_sql(), "COUNT(*)");
        assert_binding!(
            Field::new("products", "category").distinct().to_sql(),
            r#"DISTINCT "products"."category""#
        );
        assert_binding!(
            Field::new("products", "category")
                .distinct()
                .count()
                .to_sql(),
            r#"COUNT(DISTINCT "products"."category")"#
        );
        assert_binding!(
            price.sum().gt(1000).to_sql(),
            r#"SUM("products"."price") > $1"#,
            1000
        );
    }

    #[multiplatform_test]
    fn if_null() {
        let name = Field::new("users", "name");

        assert_binding!(
            name.if_null("Anonymous").to_sql(),
            r#"IFNULL("users"."name",$1)"#,
            "Anonymous"
        );
    }

    #[multiplatform_test]
    fn position_in() {
        let status = Field::new("orders", "status");

        assert_binding!(
            status.position_in(["paid", "shipped"]).to_sql(),
            r#"FIELD("orders"."status",$1,$2)"#,
            "paid",
            "shipped"
        );
    }

    #[multiplatform_test]
    fn column_to_column() {
        let quantity = Field::new("orders", "quantity");
        let unit_price = Field::new("orders", "unit_price");

        assert_binding!(
            quantity.mul_col(&unit_price).to_sql(),
            r#"("orders"."quantity") * ("orders"."unit_price")"#
        );
        assert_binding!(
            quantity.add_col(&unit_price).to_sql(),
            r#"("orders"."quantity") + ("orders"."unit_price")"#
        );
        assert_binding!(
            quantity.sub_col(&unit_price).to_sql(),
            r#"("orders"."quantity") - ("orders"."unit_price")"#
        );
        assert_binding!(
            quantity.div_col(&unit_price).to_sql(),
            r#"("orders"."quantity") / ("orders"."unit_price")"#
        );

        let first = Field::new("users", "first_name");
        let last = Field::new("users", "last_name");
        assert_binding!(
            first.concat_col(&last).to_sql(),
            r#"CONCAT(("users"."first_name"),("users"."last_name"))"#
        );

        let id = Field::new("table1", "id");
        let ref_id = Field::new("table2", "ref_id");
        assert_binding!(
            id.eq_col(&ref_id).to_sql(),
            r#"("table1"."id") = ("table2"."ref_id")"#
        );
        assert_binding!(
            id.lte_col(&ref_id).to_sql(),
            r#"("table1"."id") <= ("table2"."ref_id")"#
        );
    }

    #[multiplatform_test]
    fn column_to_column_groups_compound_operands() {
        let quantity = Field::new("orders", "quantity");
        let discount = Field::new("orders", "discount");

        assert_binding!(
            quantity.add(1).mul_col(&discount.sub(2)).to_sql(),
            r#"("orders"."quantity" + $1) * ("orders"."discount" - $2)"#,
            1,
            2
        );
    }

    #[multiplatform_test]
    fn presentation() {
        let name = Field::new("users", "name");

        assert_binding!(name.asc().to_sql(), r#""users"."name" ASC"#);
        assert_binding!(name.desc().to_sql(), r#""users"."name" DESC"#);
        assert_binding!(
            name.alias("username").to_sql(),
            r#""users"."name" AS "username""#
        );
    }

    #[multiplatform_test]
    fn assignment() {
        let name = Field::new("users", "name");
        assert_binding!(
            name.value("John Doe").to_sql(),
            r#""name" = $1"#,
            "John Doe"
        );

        let age = Field::new("users", "age");
        assert_binding!(
            age.value_field(&age.add(1)).to_sql(),
            r#""age" = "users"."age" + $1"#,
            1
        );
    }

    #[multiplatform_test]
    fn unsafe_raw() {
        let count = Field::unsafe_raw("COUNT(*)", []).unwrap();
        assert_binding!(count.to_sql(), "COUNT(*)");

        let with_params = Field::unsafe_raw(
            "DATE_ADD(?, INTERVAL ? DAY)",
            [SQLParamContainer::new("2024-01-01"), SQLParamContainer::new(7)],
        )
        .unwrap();
        assert_binding!(
            with_params.gt(3).to_sql(),
            "DATE_ADD($1, INTERVAL $2 DAY) > $3",
            "2024-01-01",
            7,
            3
        );

        assert_eq!(
            Field::unsafe_raw("? + ?", [SQLParamContainer::new(1)]),
            Err(ExpressionError::PlaceholderMismatch {
                placeholders: 2,
                params: 1
            })
        );
    }

    #[multiplatform_test]
    fn arithmetic_on_raw_sql_is_grouped() {
        let total = Field::unsafe_raw(r#""a" + "b""#, []).unwrap();

        assert_binding!(total.mul(2).to_sql(), r#"("a" + "b") * $1"#, 2);
        assert_binding!(
            crate::sql::function::random().mul(10).to_sql(),
            "(RANDOM()) * $1",
            10
        );
    }

    #[multiplatform_test]
    fn base_column() {
        let age = Field::new("users", "age");
        let expected = ColumnRef::new("users", "age", &[]);

        assert_eq!(age.add(1).column(), None);
        assert_eq!(age.add(1).mul(2).base_column(), Some(&expected));
        assert_eq!(age.distinct().count().base_column(), Some(&expected));
        assert_eq!(
            age.concat_col(&Field::new("users", "name")).base_column(),
            Some(&expected)
        );
        assert_eq!(Field::unsafe_raw("NOW()", []).unwrap().base_column(), None);
    }

    #[multiplatform_test]
    fn operations_do_not_modify_the_field() {
        let age = Field::new("users", "age");
        let original = age.clone();

        let _ = age.add(1).sum();
        let _ = age.eq(5);
        let _ = age.value(5);

        assert_eq!(age, original);
        assert_eq!(age.column(), Some(&ColumnRef::new("users", "age", &[])));
    }
}
