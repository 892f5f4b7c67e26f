//! Compiles a UPnP `SortCriteria` CSV into an `ORDER BY` clause.

use super::emitter::{ColumnMapperSet, ColumnMapping, SqlEmitter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

struct SortTerm {
    direction: Direction,
    property: String,
}

fn parse_terms(criteria: &str) -> Vec<SortTerm> {
    criteria
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|field| match field.split_at(1) {
            ("-", rest) => SortTerm { direction: Direction::Desc, property: rest.to_string() },
            ("+", rest) => SortTerm { direction: Direction::Asc, property: rest.to_string() },
            _ => SortTerm { direction: Direction::Asc, property: field.to_string() },
        })
        .collect()
}

/// Unknown properties are silently dropped. A property mapping to multiple
/// columns (e.g. `upnp:originalTrackNumber`) fans out into multiple ordered
/// terms, all sharing the term's direction.
pub fn compile(criteria: &str, mappers: &ColumnMapperSet, emitter: &dyn SqlEmitter) -> String {
    let mut terms = Vec::new();
    for term in parse_terms(criteria) {
        for column in mappers.resolve_all(&term.property) {
            let column_ref = match column {
                ColumnMapping::FirstClass { alias, column } => emitter.column_ref(&alias, &column),
                ColumnMapping::Metadata { alias, .. } => emitter.column_ref(&alias, "property_value"),
            };
            terms.push(format!("{column_ref} {}", term.direction.as_sql()));
        }
    }
    terms.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::emitter::ProductionEmitter;

    #[test]
    fn s7_sort_by_track_number_dual_column() {
        let mappers = ColumnMapperSet::with_alias("alias");
        let sql = compile("+upnp:originalTrackNumber", &mappers, &ProductionEmitter);
        assert_eq!(sql, "alias.number1 ASC, alias.number2 ASC");
    }

    #[test]
    fn unknown_properties_are_dropped_silently() {
        let mappers = ColumnMapperSet::with_alias("alias");
        let sql = compile("+dc:title,-completelyunknown,+@id", &mappers, &ProductionEmitter);
        assert_eq!(sql, "alias.property_value ASC, alias.id ASC");
    }

    #[test]
    fn default_direction_is_ascending() {
        let mappers = ColumnMapperSet::with_alias("alias");
        let sql = compile("@id", &mappers, &ProductionEmitter);
        assert_eq!(sql, "alias.id ASC");
    }
}
