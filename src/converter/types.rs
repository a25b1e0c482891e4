use crate::avro::TypeExpr;

/// Separator between union members.
pub const UNION_SEPARATOR: &str = "|";

/// Render a type expression as a display string.
///
/// - `Named` → the name verbatim
/// - `Array` → `array<items>`
/// - `Map` → `map<values>`
/// - `Union` → members joined by `|`, in declaration order
pub fn render_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Array(items) => format!("array<{}>", render_type(items)),
        TypeExpr::Map(values) => format!("map<{}>", render_type(values)),
        TypeExpr::Union(members) => members
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(UNION_SEPARATOR),
    }
}
