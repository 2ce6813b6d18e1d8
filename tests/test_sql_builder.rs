//! Unit tests for the SqlBuilder query construction.

use fuelwatch::SqlBuilder;

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn new_creates_select_star_from_table() {
    let (sql, params) = SqlBuilder::new("ledger").build();
    assert_eq!(sql, "SELECT *\nFROM ledger");
    assert!(params.is_empty());
}

#[test]
fn select_replaces_default_star() {
    let (sql, _) = SqlBuilder::new("ledger")
        .select(&["fecha", "diesel"])
        .build();
    assert!(sql.starts_with("SELECT fecha, diesel\n"));
}

// ---------------------------------------------------------------------------
// WHERE conditions
// ---------------------------------------------------------------------------

#[test]
fn where_eq_adds_equality_with_param() {
    let (sql, params) = SqlBuilder::new("ledger")
        .where_eq("fecha", "2025-10-22")
        .build();
    assert!(sql.contains("WHERE fecha = ?"));
    assert_eq!(params, vec!["2025-10-22"]);
}

#[test]
fn range_conditions_are_joined_with_and() {
    let (sql, params) = SqlBuilder::new("ledger")
        .where_gte("fecha", "2025-01-01")
        .where_lte("fecha", "2025-06-30")
        .build();
    assert!(sql.contains("WHERE fecha >= ? AND fecha <= ?"));
    assert_eq!(params, vec!["2025-01-01", "2025-06-30"]);
}

#[test]
fn where_not_null_takes_no_params() {
    let (sql, params) = SqlBuilder::new("ledger")
        .where_not_null("fecha")
        .build();
    assert!(sql.contains("WHERE fecha IS NOT NULL"));
    assert!(params.is_empty());
}

#[test]
fn raw_where_clause_keeps_param_order() {
    let (sql, params) = SqlBuilder::new("ledger")
        .where_clause("diesel BETWEEN ? AND ?", &["-1.0", "1.0"])
        .where_eq("fecha", "2025-10-22")
        .build();
    assert!(sql.contains("diesel BETWEEN ? AND ? AND fecha = ?"));
    assert_eq!(params, vec!["-1.0", "1.0", "2025-10-22"]);
}

// ---------------------------------------------------------------------------
// ORDER BY / LIMIT
// ---------------------------------------------------------------------------

#[test]
fn order_by_and_limit() {
    let (sql, _) = SqlBuilder::new("ledger")
        .order_by(&["fecha DESC", "diesel ASC"])
        .limit(5)
        .build();
    assert!(sql.contains("ORDER BY fecha DESC, diesel ASC"));
    assert!(sql.ends_with("LIMIT 5"));
}

#[test]
fn clauses_appear_in_sql_order() {
    let (sql, _) = SqlBuilder::new("ledger")
        .limit(1)
        .order_by(&["fecha"])
        .where_not_null("fecha")
        .build();
    let where_pos = sql.find("WHERE").unwrap();
    let order_pos = sql.find("ORDER BY").unwrap();
    let limit_pos = sql.find("LIMIT").unwrap();
    assert!(where_pos < order_pos && order_pos < limit_pos);
}
