use scylla_declarative_api::shared::domain::model::{
    entities::query_result::{ColumnSpec, QueryResult},
    enums::{
        result_set_error::ResultSetError, statement_execution_error::StatementExecutionError,
    },
    value_objects::cql_value::CqlValue,
};

fn sample() -> QueryResult {
    QueryResult::new(
        vec![
            ColumnSpec::new("service_level", "text"),
            ColumnSpec::new("timeout", "duration"),
        ],
        vec![vec![
            CqlValue::from("batch_jobs"),
            CqlValue::Duration {
                months: 0,
                days: 0,
                nanoseconds: 1_500_000_000,
            },
        ]],
    )
}

#[test]
fn find_column_locates_columns_by_name() {
    let result = sample();

    assert_eq!(result.find_column("timeout"), Ok(1));
    assert_eq!(result.find_optional_column("shares"), None);
    assert_eq!(
        result.find_column("shares"),
        Err(ResultSetError::MissingColumn("shares".to_string()))
    );
}

#[test]
fn cells_convert_to_expected_types_only() {
    let result = sample();
    let row = &result.rows[0];

    assert_eq!(QueryResult::cell(row, 0).and_then(CqlValue::as_text), Ok("batch_jobs"));
    assert_eq!(
        QueryResult::cell(row, 1).and_then(CqlValue::as_duration),
        Ok((0, 0, 1_500_000_000))
    );
    assert_eq!(
        QueryResult::cell(row, 0).and_then(CqlValue::as_boolean),
        Err(ResultSetError::UnexpectedType {
            expected: "boolean",
            actual: "text"
        })
    );
    assert_eq!(QueryResult::cell(row, 5), Err(ResultSetError::MissingCell(5)));
}

#[test]
fn only_server_messages_about_missing_objects_indicate_missing_object() {
    assert!(
        StatementExecutionError::Request("<keyspace ks> doesn't exist".to_string())
            .indicates_missing_object()
    );
    assert!(
        !StatementExecutionError::Request("Unauthorized".to_string()).indicates_missing_object()
    );
    assert!(
        !StatementExecutionError::Connection("host doesn't exist".to_string())
            .indicates_missing_object()
    );
}
