//! OFFSET/FETCH pagination tests through the platform surface

use pretty_assertions::assert_eq;

use rust_sqlgen::platform::{Platform, SqlServerPlatform};

fn platform() -> SqlServerPlatform {
    SqlServerPlatform::new()
}

#[test]
fn test_modify_limit_query() {
    assert_eq!(
        platform().modify_limit_query("SELECT * FROM user", 10, 0),
        "SELECT * FROM user ORDER BY (SELECT 0) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn test_modify_limit_query_with_offset() {
    assert_eq!(
        platform().modify_limit_query("SELECT * FROM user ORDER BY username DESC", 10, 5),
        "SELECT * FROM user ORDER BY username DESC OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn test_limit_query_defaults_to_zero_offset() {
    assert_eq!(
        platform().limit_query("SELECT * FROM user", 30),
        "SELECT * FROM user ORDER BY (SELECT 0) OFFSET 0 ROWS FETCH NEXT 30 ROWS ONLY"
    );
}

#[test]
fn test_original_statement_text_is_preserved() {
    let query = "SELECT m0_.NOMBRE AS NOMBRE0, m0_.FECHAINICIO AS FECHAINICIO1 \
                 FROM MEDICION m0_ \
                 INNER JOIN ESTUDIO e1_ ON m0_.ESTUDIO_ID = e1_.ID \
                 WHERE c2_.ID = 130";
    let paged = platform().modify_limit_query(query, 10, 0);
    assert!(paged.starts_with(query));
    assert!(paged.ends_with(" ORDER BY (SELECT 0) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"));
}

#[test]
fn test_sub_select_ordering_does_not_count_as_outer() {
    assert_eq!(
        platform().modify_limit_query(
            "SELECT * FROM test t WHERE t.id = \
             (SELECT TOP 1 t2.id FROM test t2 ORDER BY t2.data DESC)",
            10,
            0
        ),
        "SELECT * FROM test t WHERE t.id = \
         (SELECT TOP 1 t2.id FROM test t2 ORDER BY t2.data DESC) \
         ORDER BY (SELECT 0) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn test_distinct_single_column_orders_by_ordinal() {
    assert_eq!(
        platform().modify_limit_query("SELECT DISTINCT id_0 FROM (SELECT id AS id_0 FROM t) r", 10, 0),
        "SELECT DISTINCT id_0 FROM (SELECT id AS id_0 FROM t) r \
         ORDER BY 1 OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}
