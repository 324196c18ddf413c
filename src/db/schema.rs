pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

pub const SCHEMA_VERSION: &str = "1.0.0";

/// Splits a schema file into executable statements. SQLite's driver only
/// accepts one statement per query, and a naive split on ';' would break
/// inside quoted literals.
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for line in sql.lines() {
        if !in_single_quote && !in_double_quote && line.trim_start().starts_with("--") {
            continue;
        }
        for ch in line.chars() {
            match ch {
                '\'' if !in_double_quote => in_single_quote = !in_single_quote,
                '"' if !in_single_quote => in_double_quote = !in_double_quote,
                ';' if !in_single_quote && !in_double_quote => {
                    let stmt = current.trim();
                    if !stmt.is_empty() {
                        statements.push(stmt.to_string());
                    }
                    current.clear();
                    continue;
                }
                _ => {}
            }
            current.push(ch);
        }
        current.push('\n');
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_statement_boundaries() {
        let stmts = split_sql_statements("CREATE TABLE a (x);\nCREATE TABLE b (y);");
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("CREATE TABLE a"));
    }

    #[test]
    fn ignores_semicolons_inside_literals() {
        let stmts = split_sql_statements("INSERT INTO a VALUES ('x;y');");
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn drops_comment_lines() {
        let stmts = split_sql_statements("-- header\nCREATE TABLE a (x);");
        assert_eq!(stmts.len(), 1);
        assert!(!stmts[0].contains("header"));
    }

    #[test]
    fn schema_parses_into_statements() {
        let stmts = split_sql_statements(SCHEMA_SQL);
        assert!(stmts.iter().any(|s| s.contains(r#""words""#)));
        assert!(stmts.iter().any(|s| s.contains(r#""app_storage""#)));
    }
}
