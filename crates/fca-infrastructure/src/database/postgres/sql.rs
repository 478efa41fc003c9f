//! SQL building shared by the repositories and the import session.
//!
//! Column names are fixed uppercase identifiers and always quoted. Values are
//! bound by field kind; dates travel as text and are cast by the server, so an
//! unparsable date fails the statement.

use sqlx::{Postgres, QueryBuilder};
use tracing::error;

use fca_core::domain::{FieldKind, FieldValue, NumericType, RecordKind, Row};
use fca_core::error::StoreError;

pub(crate) fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

/// Schema-qualified, quoted table name
pub(crate) fn table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote(schema), quote(table))
}

pub(crate) fn push_value(qb: &mut QueryBuilder<'_, Postgres>, kind: FieldKind, value: Option<&FieldValue>) {
    match kind {
        FieldKind::Boolean | FieldKind::Status | FieldKind::Numeric(NumericType::Integer) => {
            qb.push_bind(value.and_then(FieldValue::as_i64));
        }
        FieldKind::Numeric(NumericType::Decimal) => {
            qb.push_bind(value.and_then(FieldValue::as_f64));
        }
        FieldKind::Date => {
            qb.push("CAST(");
            qb.push_bind(value.map(FieldValue::to_text));
            qb.push(" AS DATE)");
        }
        FieldKind::Text => {
            qb.push_bind(value.map(FieldValue::to_text));
        }
    }
}

/// `INSERT` of every column of the row's kind; campaign inserts return the new id
pub(crate) fn insert_query(schema: &str, row: &Row) -> QueryBuilder<'static, Postgres> {
    let kind = row.kind();
    let columns: Vec<String> = kind.columns().iter().map(|c| quote(c.name)).collect();

    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        table(schema, kind.table()),
        columns.join(", ")
    ));
    for (idx, (column, value)) in row.iter().enumerate() {
        if idx > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, column.kind, value);
    }
    qb.push(")");

    if kind == RecordKind::Campaign {
        qb.push(" RETURNING \"CAMPAIGNID\"");
    }
    qb
}

/// `SET "A" = $1, "B" = $2, ...` over the named columns of `row`
pub(crate) fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, row: &Row, columns: &[&str]) {
    let kind = row.kind();
    let mut first = true;
    for name in columns {
        let Some(column) = kind.columns().iter().find(|c| c.name == *name) else {
            continue;
        };
        qb.push(if first { " SET " } else { ", " });
        first = false;
        qb.push(quote(column.name));
        qb.push(" = ");
        push_value(qb, column.kind, row.get(column.name));
    }
}

pub(crate) fn classify_error(context: &str, e: sqlx::Error) -> StoreError {
    error!("Database error {}: {}", context, e);
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::UniqueViolation(db.constraint().unwrap_or(db.message()).to_string())
        }
        _ => StoreError::Database(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fca_core::domain::lookup::LOOKUP_EDITABLE;

    #[test]
    fn test_lookup_insert_sql() {
        let row = Row::empty(RecordKind::Lookup);
        let qb = insert_query("fca", &row);

        assert_eq!(
            qb.sql(),
            "INSERT INTO \"fca\".\"ACH_FCA_LOOKUP\" (\"CAMPAIGNID\", \"RETAILERID\", \"PRODUCTID\", \
             \"STARTDATE\", \"ENDDATE\", \"TARGET\", \"COMMISSION\", \"MIN\", \"MAX\", \"CAP\") \
             VALUES ($1, $2, $3, CAST($4 AS DATE), CAST($5 AS DATE), $6, $7, $8, $9, $10)"
        );
    }

    #[test]
    fn test_campaign_insert_returns_id() {
        let row = Row::empty(RecordKind::Campaign);
        let qb = insert_query("fca", &row);

        assert!(qb.sql().starts_with("INSERT INTO \"fca\".\"ACH_FCA_CAMPAIGN\" (\"TENANTID\""));
        assert!(qb.sql().ends_with("$19) RETURNING \"CAMPAIGNID\""));
    }

    #[test]
    fn test_assignments_cover_editable_columns() {
        let row = Row::empty(RecordKind::Lookup);
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new("UPDATE t");
        push_assignments(&mut qb, &row, &LOOKUP_EDITABLE);

        assert_eq!(
            qb.sql(),
            "UPDATE t SET \"CAMPAIGNID\" = $1, \"STARTDATE\" = CAST($2 AS DATE), \
             \"ENDDATE\" = CAST($3 AS DATE), \"TARGET\" = $4, \"COMMISSION\" = $5, \
             \"MIN\" = $6, \"MAX\" = $7, \"CAP\" = $8"
        );
    }
}
