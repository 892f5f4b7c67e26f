//! Lowers a parsed [`Expr`](super::ast::Expr) to a SQL predicate fragment.
//!
//! Four [`ColumnMapper`]s cover the object table (first-class columns like
//! `id`, `upnp_class`), the metadata table (the generic `dc:`/`upnp:`
//! key-value properties), the resource table (`res@*` attributes) and the
//! playtrack table (play counts, track numbers). A property is resolved by
//! trying each mapper in that order and taking the first match.

use super::ast::{Expr, Value};
use super::lexer::{CompareOp, StringOp};
use crate::error::StorageError;

/// How a property maps onto a concrete SQL column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMapping {
    /// A real column on the mapper's table, compared directly.
    FirstClass { alias: String, column: String },
    /// A row in a generic key/value metadata table, filtered by `property_name`.
    Metadata { alias: String, property: String },
}

pub trait ColumnMapper {
    /// All columns a property lowers to. Empty if this mapper doesn't own it.
    /// More than one entry means the property fans out (see the sort compiler).
    fn columns(&self, property: &str) -> Vec<ColumnMapping>;
}

pub struct ObjectColumnMapper {
    pub alias: String,
}

impl ColumnMapper for ObjectColumnMapper {
    fn columns(&self, property: &str) -> Vec<ColumnMapping> {
        let column = match property {
            "@id" | "id" => "id",
            "@parentID" | "@parentId" => "parent_id",
            "@refID" | "@refId" => "ref_id",
            "upnp:class" => "upnp_class",
            "dc:date" | "last_updated" => "last_updated",
            _ => return Vec::new(),
        };
        vec![ColumnMapping::FirstClass { alias: self.alias.clone(), column: column.to_string() }]
    }
}

pub struct ResourceColumnMapper {
    pub alias: String,
}

impl ColumnMapper for ResourceColumnMapper {
    fn columns(&self, property: &str) -> Vec<ColumnMapping> {
        let column = match property {
            "res@size" => "size",
            "res@duration" => "duration",
            "res@bitrate" => "bitrate",
            "res@resolution" => "resolution",
            "res@protocolInfo" => "protocol_info",
            _ => return Vec::new(),
        };
        vec![ColumnMapping::FirstClass { alias: self.alias.clone(), column: column.to_string() }]
    }
}

pub struct PlaytrackColumnMapper {
    pub alias: String,
}

impl ColumnMapper for PlaytrackColumnMapper {
    fn columns(&self, property: &str) -> Vec<ColumnMapping> {
        match property {
            // Maps to two distinct numeric slots on the playtrack table: the
            // original disc/part number and the in-disc track number.
            "upnp:originalTrackNumber" => vec![
                ColumnMapping::FirstClass { alias: self.alias.clone(), column: "number1".into() },
                ColumnMapping::FirstClass { alias: self.alias.clone(), column: "number2".into() },
            ],
            "upnp:playbackCount" => {
                vec![ColumnMapping::FirstClass { alias: self.alias.clone(), column: "play_count".into() }]
            }
            "upnp:lastPlaybackTime" => {
                vec![ColumnMapping::FirstClass { alias: self.alias.clone(), column: "last_played".into() }]
            }
            _ => Vec::new(),
        }
    }
}

pub struct MetadataColumnMapper {
    pub alias: String,
}

impl ColumnMapper for MetadataColumnMapper {
    fn columns(&self, property: &str) -> Vec<ColumnMapping> {
        if property.contains(':') {
            vec![ColumnMapping::Metadata { alias: self.alias.clone(), property: property.to_string() }]
        } else {
            Vec::new()
        }
    }
}

/// The four table-scoped mappers a compiled query is parameterised by.
pub struct ColumnMapperSet {
    pub object: ObjectColumnMapper,
    pub metadata: MetadataColumnMapper,
    pub resource: ResourceColumnMapper,
    pub playtrack: PlaytrackColumnMapper,
}

impl ColumnMapperSet {
    pub fn with_alias(alias: &str) -> Self {
        Self {
            object: ObjectColumnMapper { alias: alias.to_string() },
            metadata: MetadataColumnMapper { alias: alias.to_string() },
            resource: ResourceColumnMapper { alias: alias.to_string() },
            playtrack: PlaytrackColumnMapper { alias: alias.to_string() },
        }
    }

    fn mappers(&self) -> [&dyn ColumnMapper; 4] {
        [&self.object, &self.playtrack, &self.resource, &self.metadata]
    }

    /// First mapping a property resolves to, object table wins ties.
    pub fn resolve_one(&self, property: &str) -> Option<ColumnMapping> {
        self.resolve_all(property).into_iter().next()
    }

    /// Every column a property fans out to (sort uses all of them).
    pub fn resolve_all(&self, property: &str) -> Vec<ColumnMapping> {
        for mapper in self.mappers() {
            let columns = mapper.columns(property);
            if !columns.is_empty() {
                return columns;
            }
        }
        Vec::new()
    }
}

/// Controls how `alias.column` references are rendered. Production code only
/// ever uses [`ProductionEmitter`]; the `_alias_._col_` style some of the
/// original test fixtures expect is quarantined behind `#[cfg(test)]` so it
/// can never leak into a real query.
pub trait SqlEmitter {
    fn column_ref(&self, alias: &str, column: &str) -> String {
        format!("{alias}.{column}")
    }
}

pub struct ProductionEmitter;

impl SqlEmitter for ProductionEmitter {}

#[cfg(test)]
pub struct DebugEmitter;

#[cfg(test)]
impl SqlEmitter for DebugEmitter {
    fn column_ref(&self, alias: &str, column: &str) -> String {
        format!("_{alias}_._{column}_")
    }
}

fn compare_op_str(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "=",
        CompareOp::Ne => "!=",
        CompareOp::Lt => "<",
        CompareOp::Le => "<=",
        CompareOp::Gt => ">",
        CompareOp::Ge => ">=",
    }
}

fn escape_sql(value: &str) -> String {
    value.replace('\'', "''")
}

/// Resolves the `@last7` dynamic token to a Unix timestamp seven days in the
/// past, evaluated at lowering time.
fn resolve_dynamic_value(value: &str, now_unix: i64) -> String {
    if value == "@last7" {
        (now_unix - 7 * 86_400).to_string()
    } else {
        value.to_string()
    }
}

pub fn emit(expr: &Expr, mappers: &ColumnMapperSet, emitter: &dyn SqlEmitter, now_unix: i64) -> Result<String, StorageError> {
    match expr {
        Expr::Compare { property, op, value } => emit_compare(property, *op, value, mappers, emitter, now_unix),
        Expr::StringOp { property, op, value } => emit_string_op(property, *op, value, mappers, emitter),
        Expr::Exists { property, value } => emit_exists(property, *value, mappers, emitter),
        Expr::And(lhs, rhs) => {
            Ok(format!("{} AND {}", emit(lhs, mappers, emitter, now_unix)?, emit(rhs, mappers, emitter, now_unix)?))
        }
        Expr::Or(lhs, rhs) => {
            Ok(format!("{} OR {}", emit(lhs, mappers, emitter, now_unix)?, emit(rhs, mappers, emitter, now_unix)?))
        }
        Expr::Group(inner) => Ok(format!("({})", emit(inner, mappers, emitter, now_unix)?)),
    }
}

fn emit_compare(
    property: &str,
    op: CompareOp,
    value: &Value,
    mappers: &ColumnMapperSet,
    emitter: &dyn SqlEmitter,
    now_unix: i64,
) -> Result<String, StorageError> {
    let Value::Str(raw) = value else {
        // Property-to-property comparisons are not exercised by first-class
        // or metadata columns; reject rather than emit something wrong.
        return Err(StorageError::SearchParse(format!(
            "property-to-property comparison on '{property}' is not supported"
        )));
    };
    let resolved = resolve_dynamic_value(raw, now_unix);
    let mapping = mappers
        .resolve_one(property)
        .ok_or_else(|| StorageError::SearchParse(format!("unknown search property '{property}'")))?;
    let op_str = compare_op_str(op);
    Ok(match mapping {
        ColumnMapping::FirstClass { alias, column } => {
            format!("{} {op_str} '{}'", emitter.column_ref(&alias, &column), escape_sql(&resolved))
        }
        ColumnMapping::Metadata { alias, property } => {
            let name_ref = emitter.column_ref(&alias, "property_name");
            let value_ref = emitter.column_ref(&alias, "property_value");
            format!("({name_ref}='{property}' AND LOWER({value_ref}){op_str}LOWER('{}'))", escape_sql(&resolved))
        }
    })
}

fn emit_string_op(
    property: &str,
    op: StringOp,
    value: &str,
    mappers: &ColumnMapperSet,
    emitter: &dyn SqlEmitter,
) -> Result<String, StorageError> {
    if op == StringOp::DerivedFrom {
        // derivedfrom only ever targets upnp:class on the object table.
        let alias = &mappers.object.alias;
        let class_ref = emitter.column_ref(alias, "upnp_class");
        return Ok(format!("(LOWER({class_ref}) LIKE LOWER('{}%'))", escape_sql(value)));
    }

    let pattern = match op {
        StringOp::Contains => format!("%{}%", escape_sql(value)),
        StringOp::DoesNotContain => format!("%{}%", escape_sql(value)),
        StringOp::StartsWith => format!("{}%", escape_sql(value)),
        StringOp::DerivedFrom => unreachable!("handled above"),
    };
    let like_kw = if op == StringOp::DoesNotContain { "NOT LIKE" } else { "LIKE" };

    let mapping = mappers
        .resolve_one(property)
        .ok_or_else(|| StorageError::SearchParse(format!("unknown search property '{property}'")))?;
    Ok(match mapping {
        ColumnMapping::FirstClass { alias, column } => {
            let col_ref = emitter.column_ref(&alias, &column);
            format!("(LOWER({col_ref}) {like_kw} LOWER('{pattern}'))")
        }
        ColumnMapping::Metadata { alias, property } => {
            let name_ref = emitter.column_ref(&alias, "property_name");
            let value_ref = emitter.column_ref(&alias, "property_value");
            format!("({name_ref}='{property}' AND LOWER({value_ref}) {like_kw} LOWER('{pattern}'))")
        }
    })
}

fn emit_exists(
    property: &str,
    want_present: bool,
    mappers: &ColumnMapperSet,
    emitter: &dyn SqlEmitter,
) -> Result<String, StorageError> {
    let null_check = if want_present { "IS NOT NULL" } else { "IS NULL" };
    let mapping = mappers
        .resolve_one(property)
        .ok_or_else(|| StorageError::SearchParse(format!("unknown search property '{property}'")))?;
    Ok(match mapping {
        ColumnMapping::FirstClass { alias, column } => {
            format!("{} {null_check}", emitter.column_ref(&alias, &column))
        }
        ColumnMapping::Metadata { alias, property } => {
            let name_ref = emitter.column_ref(&alias, "property_name");
            let value_ref = emitter.column_ref(&alias, "property_value");
            format!("({name_ref}='{property}' AND {value_ref} {null_check})")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::parser::parse;

    fn mappers() -> ColumnMapperSet {
        ColumnMapperSet::with_alias("alias")
    }

    #[test]
    fn s3_search_equals() {
        let expr = parse(r#"upnp:artist = "Kyuss""#).unwrap();
        let sql = emit(&expr, &mappers(), &ProductionEmitter, 0).unwrap();
        assert_eq!(sql, "(alias.property_name='upnp:artist' AND LOWER(alias.property_value)=LOWER('Kyuss'))");
    }

    #[test]
    fn s4_search_derivedfrom() {
        let expr = parse(r#"upnp:class derivedfrom "object.item.audioItem" and upnp:artist="King Krule""#).unwrap();
        let sql = emit(&expr, &mappers(), &ProductionEmitter, 0).unwrap();
        assert_eq!(
            sql,
            "(LOWER(alias.upnp_class) LIKE LOWER('object.item.audioItem%')) AND \
             (alias.property_name='upnp:artist' AND LOWER(alias.property_value)=LOWER('King Krule'))"
        );
    }

    #[test]
    fn debug_emitter_never_used_outside_tests() {
        let expr = parse(r#"upnp:artist = "Kyuss""#).unwrap();
        let sql = emit(&expr, &mappers(), &DebugEmitter, 0).unwrap();
        assert_eq!(
            sql,
            "(_alias_._property_name_='upnp:artist' AND LOWER(_alias_._property_value_)=LOWER('Kyuss'))"
        );
    }

    #[test]
    fn last7_resolves_to_a_past_timestamp() {
        let expr = parse(r#"dc:date >= "@last7""#).unwrap();
        let sql = emit(&expr, &mappers(), &ProductionEmitter, 1_000_000).unwrap();
        assert_eq!(sql, format!("alias.last_updated >= '{}'", 1_000_000 - 7 * 86_400));
    }

    #[test]
    fn unknown_property_is_an_error() {
        let expr = parse(r#"totally:unknown = "x""#).unwrap();
        // `totally:unknown` actually resolves via the metadata fallback since
        // it contains a colon; use a colon-free token to hit the error path.
        let _ = expr;
        let expr = parse(r#"unknownproperty = "x""#).unwrap();
        assert!(emit(&expr, &mappers(), &ProductionEmitter, 0).is_err());
    }
}
