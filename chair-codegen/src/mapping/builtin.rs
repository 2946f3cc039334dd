//! The built-in PostgreSQL catalog.

use chair_core::TypeMapping;

const SQL: &str = "database/sql";
const TIME: &str = "time";

/// `(db_type, non-null type, nullable type)`; `None` for nullable means the
/// type never appears on a nullable column.
type Row = (&'static str, &'static str, Option<&'static str>);

const NUMERIC: &[Row] = &[
    ("smallint", "int", Some("NullInt32")),
    ("integer", "int", Some("NullInt32")),
    ("bigint", "int64", Some("NullInt64")),
    ("decimal", "float64", Some("NullFloat64")),
    ("numeric", "float64", Some("NullFloat64")),
    ("real", "float32", Some("NullFloat64")),
    ("double precision", "float64", Some("NullFloat64")),
    ("smallserial", "int", None),
    ("serial", "int", None),
    ("bigserial", "int64", None),
];

const MONEY: &[Row] = &[("money", "float64", Some("NullFloat64"))];

const CHARACTER: &[Row] = &[
    ("character", "string", Some("NullString")),
    ("char", "string", Some("NullString")),
    ("character varying", "string", Some("NullString")),
    ("varchar", "string", Some("NullString")),
    ("bpchar", "string", Some("NullString")),
    ("text", "string", Some("NullString")),
];

// Non-null datetime types map to time.Time rather than a builtin.
const DATETIME: &[Row] = &[
    ("timestamp", "Time", Some("NullTime")),
    ("timestamp with time zone", "Time", Some("NullTime")),
    ("timestamp without time zone", "Time", Some("NullTime")),
    ("date", "Time", Some("NullTime")),
    ("time", "Time", Some("NullTime")),
    ("time with time zone", "Time", Some("NullTime")),
    ("time without time zone", "Time", Some("NullTime")),
];

const BOOLEAN: &[Row] = &[("boolean", "bool", Some("NullBool"))];

const UUID: &[Row] = &[("uuid", "string", Some("NullString"))];

/// The built-in mappings, grouped by type domain.
///
/// Within each domain the non-null entries come first, then the nullable
/// ones, which use the `database/sql` `Null*` wrappers.
pub fn builtin_mappings() -> Vec<TypeMapping> {
    let mut mappings = Vec::new();

    for (domain, non_null_pkg) in [
        (NUMERIC, None),
        (MONEY, None),
        (CHARACTER, None),
        (DATETIME, Some(TIME)),
        (BOOLEAN, None),
        (UUID, None),
    ] {
        for (db_type, go_type, _) in domain {
            let mapping = TypeMapping::new(*db_type, *go_type);
            mappings.push(match non_null_pkg {
                Some(pkg) => mapping.package(pkg),
                None => mapping,
            });
        }
        for (db_type, _, nullable_type) in domain {
            if let Some(go_type) = nullable_type {
                mappings.push(TypeMapping::new(*db_type, *go_type).package(SQL).nullable());
            }
        }
    }

    mappings
}
