//! UPnP `SearchCriteria` / `SortCriteria` compiler.
//!
//! `lexer` tokenizes, `parser` builds an [`ast::Expr`], `emitter` lowers that
//! AST to a SQL predicate via a pluggable [`emitter::ColumnMapperSet`], and
//! `sort` compiles the separate `SortCriteria` CSV grammar through the same
//! mapper set.

pub mod ast;
pub mod emitter;
pub mod lexer;
pub mod parser;
pub mod sort;

use crate::error::StorageError;
use emitter::{ColumnMapperSet, ProductionEmitter, SqlEmitter};

/// Compiles a `SearchCriteria` string to a SQL predicate fragment, ready to
/// splice after a `WHERE` clause.
pub fn compile_search(criteria: &str, mappers: &ColumnMapperSet, now_unix: i64) -> Result<String, StorageError> {
    if criteria.trim().is_empty() || criteria.trim() == "*" {
        return Ok("1=1".to_string());
    }
    let expr = parser::parse(criteria)?;
    emitter::emit(&expr, mappers, &ProductionEmitter, now_unix)
}

/// Compiles a `SortCriteria` CSV to an `ORDER BY` clause (without the
/// `ORDER BY` keywords). Returns an empty string for no/empty criteria.
pub fn compile_sort(criteria: &str, mappers: &ColumnMapperSet) -> String {
    sort::compile(criteria, mappers, &ProductionEmitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_matches_everything() {
        let mappers = ColumnMapperSet::with_alias("alias");
        assert_eq!(compile_search("", &mappers, 0).unwrap(), "1=1");
        assert_eq!(compile_search("*", &mappers, 0).unwrap(), "1=1");
    }

    #[test]
    fn end_to_end_search_and_sort() {
        let mappers = ColumnMapperSet::with_alias("alias");
        let predicate = compile_search(r#"upnp:artist = "Kyuss""#, &mappers, 0).unwrap();
        assert!(predicate.contains("upnp:artist"));
        let order = compile_sort("+dc:title", &mappers);
        assert_eq!(order, "alias.property_value ASC");
    }
}
