//! Go source rendering.
//!
//! Layout follows gofmt: tab indentation, struct fields aligned in columns
//! with single-space padding, empty columns discarded.

use crate::{CodeBuilder, ImportCollector, ResolvedField, ResolvedTable};

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by chair. DO NOT EDIT.";

/// Render a complete Go source file.
pub fn render_file(
    package_name: &str,
    imports: &ImportCollector,
    tables: &[ResolvedTable],
) -> String {
    let mut builder = CodeBuilder::go();

    builder
        .push_line(HEADER)
        .push_blank()
        .push_line(&format!("package {}", package_name));

    if !imports.is_empty() {
        builder.push_blank();
        imports.render(&mut builder);
    }

    for table in tables {
        builder.push_blank();
        render_struct(&mut builder, table);
    }

    builder.build()
}

/// Render one struct declaration.
pub fn render_struct(builder: &mut CodeBuilder, table: &ResolvedTable) {
    if let Some(comment) = single_line(&table.comment) {
        builder.push_comment(&format!("{} {}", table.struct_name, comment));
    }

    builder.push_line(&format!("type {} struct {{", table.struct_name));
    builder.push_indent();
    let rows: Vec<Vec<String>> = table.fields.iter().map(field_cells).collect();
    for line in align(&rows) {
        builder.push_line(&line);
    }
    builder.push_dedent();
    builder.push_line("}");
}

/// Split a field into tabwriter-style cells.
///
/// Every cell but the last is terminated and takes part in alignment. A
/// field without a tag has its comment in the tag column.
fn field_cells(field: &ResolvedField) -> Vec<String> {
    let mut cells = vec![field.field_name.clone(), field.go_type.clone()];

    if !field.tag.is_empty() {
        cells.push(field.tag.clone());
    }
    if let Some(comment) = single_line(&field.comment) {
        cells.push(format!("// {}", comment));
    }

    cells
}

/// Align rows of cells into columns.
///
/// A column block is a run of consecutive rows whose cell in that column is
/// terminated (not the row's last cell). Each cell in a block is padded to
/// the widest cell plus one space; a block of empty cells takes no space.
pub(crate) fn align(rows: &[Vec<String>]) -> Vec<String> {
    let mut lines: Vec<String> = vec![String::new(); rows.len()];
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    for column in 0..columns {
        let mut start = 0;
        while start < rows.len() {
            if rows[start].len() <= column {
                start += 1;
                continue;
            }
            if rows[start].len() == column + 1 {
                lines[start].push_str(&rows[start][column]);
                start += 1;
                continue;
            }

            let end = (start..rows.len())
                .find(|&i| rows[i].len() <= column + 1)
                .unwrap_or(rows.len());
            let width = rows[start..end]
                .iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0);

            for i in start..end {
                let cell = &rows[i][column];
                lines[i].push_str(cell);
                if width > 0 {
                    let padding = width + 1 - cell.chars().count();
                    lines[i].extend(std::iter::repeat_n(' ', padding));
                }
            }
            start = end;
        }
    }

    lines
}

/// Collapse a comment onto one line; `None` when blank.
fn single_line(comment: &str) -> Option<String> {
    let words: Vec<&str> = comment.split_whitespace().collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Render a field type, qualifying it with its package.
///
/// Leading pointer, slice and array modifiers (`*`, `[]`, `[N]`) stay in front
/// of the qualifier. A type that is already qualified is left alone.
pub fn qualified_type(target_type: &str, qualifier: Option<&str>) -> String {
    let Some(qualifier) = qualifier else {
        return target_type.to_string();
    };

    let (modifiers, base) = split_modifiers(target_type);

    if base.contains('.') {
        target_type.to_string()
    } else {
        format!("{}{}.{}", modifiers, qualifier, base)
    }
}

fn split_modifiers(target_type: &str) -> (&str, &str) {
    let mut rest = target_type;
    loop {
        if let Some(r) = rest.strip_prefix('*') {
            rest = r;
            continue;
        }
        let array_len = rest
            .strip_prefix('[')
            .and_then(|r| r.split_once(']'))
            .filter(|(len, _)| len.chars().all(|c| c.is_ascii_digit()));
        match array_len {
            Some((_, r)) => rest = r,
            None => break,
        }
    }
    target_type.split_at(target_type.len() - rest.len())
}

/// Render the struct tag for a column, backquotes included.
///
/// Returns an empty string when no keys are configured.
pub fn render_tag(keys: &[String], column_name: &str) -> String {
    if keys.is_empty() {
        return String::new();
    }

    let value = column_name.replace('\\', "\\\\").replace('"', "\\\"");
    let pairs: Vec<String> = keys
        .iter()
        .map(|key| format!("{}:\"{}\"", key, value))
        .collect();
    let tag = pairs.join(" ");

    if tag.contains('`') {
        // Raw strings cannot hold a backquote
        format!("\"{}\"", tag.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("`{}`", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_align_two_columns() {
        let lines = align(&[row(&["ID", "int"]), row(&["TextValue", "string"])]);
        assert_eq!(lines, ["ID        int", "TextValue string"]);
    }

    #[test]
    fn test_align_tags() {
        let lines = align(&[
            row(&["ID", "int", "`db:\"id\"`"]),
            row(&["TextValue", "string", "`db:\"text_value\"`"]),
        ]);
        assert_eq!(
            lines,
            [
                "ID        int    `db:\"id\"`",
                "TextValue string `db:\"text_value\"`",
            ]
        );
    }

    #[test]
    fn test_align_comments() {
        let lines = align(&[
            row(&["ID", "int", "// primary key"]),
            row(&["Name", "string", "// display name"]),
        ]);
        assert_eq!(lines, ["ID   int    // primary key", "Name string // display name"]);
    }

    #[test]
    fn test_align_comment_in_tag_column() {
        let lines = align(&[
            row(&["ID", "int", "`db:\"id\"`", "// primary key"]),
            row(&["Name", "string", "// display name"]),
        ]);
        assert_eq!(
            lines,
            [
                "ID   int    `db:\"id\"` // primary key",
                "Name string // display name",
            ]
        );
    }

    #[test]
    fn test_align_discards_empty_column() {
        let lines = align(&[row(&["A", "", "x"]), row(&["B", "", "y"])]);
        assert_eq!(lines, ["A x", "B y"]);
    }

    #[test]
    fn test_align_blocks_break_on_short_rows() {
        let lines = align(&[
            row(&["ID", "int", "// id"]),
            row(&["Description", "string"]),
            row(&["Amount", "float64", "// amount"]),
        ]);
        assert_eq!(
            lines,
            [
                "ID          int // id",
                "Description string",
                "Amount      float64 // amount",
            ]
        );
    }

    #[test]
    fn test_qualified_type() {
        assert_eq!(qualified_type("int", None), "int");
        assert_eq!(qualified_type("NullString", Some("sql")), "sql.NullString");
        assert_eq!(qualified_type("*Time", Some("time")), "*time.Time");
        assert_eq!(qualified_type("[]UUID", Some("uuid")), "[]uuid.UUID");
        assert_eq!(qualified_type("null.Time", Some("null")), "null.Time");
        assert_eq!(qualified_type("[16]Byte", Some("uuid")), "[16]uuid.Byte");
        assert_eq!(qualified_type("*[]*Time", Some("time")), "*[]*time.Time");
        assert_eq!(qualified_type("[]null.String", Some("null")), "[]null.String");
    }

    #[test]
    fn test_render_tag() {
        let keys = vec!["db".to_string(), "json".to_string()];
        assert_eq!(render_tag(&keys, "user_id"), "`db:\"user_id\" json:\"user_id\"`");
        assert_eq!(render_tag(&[], "user_id"), "");
        assert_eq!(render_tag(&keys[..1], "a\"b"), "`db:\"a\\\"b\"`");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  "), None);
        assert_eq!(single_line("first\nsecond "), Some("first second".to_string()));
    }
}
