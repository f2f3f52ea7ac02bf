//! Expression building for DynamoDB condition and update expressions.
//!
//! Field names and values are never spliced into the expression text. Each
//! field gets a positional name alias (`#f0`) and value alias (`:v0`), which
//! sidesteps reserved words (`name`, `status`, `date`, ...) and field names
//! that are not valid placeholder tokens.

use std::collections::BTreeMap;

use crate::record::{Record, Value};

/// Prefix for expression attribute name aliases.
pub const NAME_ALIAS_PREFIX: &str = "#f";

/// Prefix for expression attribute value aliases.
pub const VALUE_ALIAS_PREFIX: &str = ":v";

/// An expression together with its alias tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: String,
    /// `#alias -> field name`
    pub names: BTreeMap<String, String>,
    /// `:alias -> value`
    pub values: BTreeMap<String, Value>,
}

/// Builds `#f0 = :v0 AND #f1 = :v1 ...` over every field in `params`.
///
/// Returns `None` for an empty mapping.
pub fn equality_condition(params: &Record) -> Option<Expression> {
    aliased_assignments(params, " AND ")
}

/// Builds `SET #f0 = :v0, #f1 = :v1 ...` over every field in `attributes`.
///
/// Returns `None` for an empty mapping, since `SET` with no clauses is invalid.
pub fn set_update(attributes: &Record) -> Option<Expression> {
    aliased_assignments(attributes, ", ").map(|mut expr| {
        expr.expression = format!("SET {}", expr.expression);
        expr
    })
}

fn aliased_assignments(fields: &Record, separator: &str) -> Option<Expression> {
    if fields.is_empty() {
        return None;
    }

    let mut clauses = Vec::with_capacity(fields.len());
    let mut names = BTreeMap::new();
    let mut values = BTreeMap::new();

    for (index, (field, value)) in fields.iter().enumerate() {
        let name_alias = format!("{NAME_ALIAS_PREFIX}{index}");
        let value_alias = format!("{VALUE_ALIAS_PREFIX}{index}");

        clauses.push(format!("{name_alias} = {value_alias}"));
        names.insert(name_alias, field.clone());
        values.insert(value_alias, value.clone());
    }

    Some(Expression {
        expression: clauses.join(separator),
        names,
        values,
    })
}
