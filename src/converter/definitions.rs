use crate::avro::{Field, TypeDefinition, TypeKind};
use crate::converter::docs::{normalize_doc, DocConverter};
use crate::converter::types::{render_type, UNION_SEPARATOR};
use crate::error::ConvertError;

/// Indent of documentation nested under a record field.
pub const FIELD_DOC_INDENT: usize = 4;
/// Indent of a type definition's own documentation.
pub const TYPE_DOC_INDENT: usize = 2;

/// Append the directive block for one type definition to `out`.
///
/// The header is always written; the record/enum/fixed body and the
/// definition's own doc are each emitted when present. Unknown tags get
/// only the header and doc.
pub fn render_definition<C>(
    out: &mut String,
    definition: &TypeDefinition,
    converter: &C,
) -> Result<(), ConvertError>
where
    C: DocConverter + ?Sized,
{
    tracing::debug!(kind = definition.kind.tag(), name = %definition.name, "rendering type");

    out.push_str(&format!(
        ".. avro:{}:: {}\n\n",
        definition.kind.tag(),
        definition.name
    ));

    match &definition.kind {
        TypeKind::Record(fields) => {
            for field in fields {
                render_field(out, field, converter)?;
            }
            out.push('\n');
        }
        TypeKind::Enum(symbols) => {
            out.push_str(&format!("  :symbols: {}\n", symbols.join(UNION_SEPARATOR)));
        }
        TypeKind::Fixed(size) => {
            out.push_str(&format!("  :size: {size}\n"));
        }
        TypeKind::Other(_) => {}
    }

    if let Some(doc) = &definition.doc {
        out.push_str(&normalize_doc(converter, doc, TYPE_DOC_INDENT)?);
        out.push_str("\n\n");
    }

    Ok(())
}

fn render_field<C>(out: &mut String, field: &Field, converter: &C) -> Result<(), ConvertError>
where
    C: DocConverter + ?Sized,
{
    out.push_str(&format!("  :field {}:\n", field.name));
    if let Some(doc) = &field.doc {
        out.push_str(&normalize_doc(converter, doc, FIELD_DOC_INDENT)?);
        out.push('\n');
    }
    out.push_str(&format!(
        "  :type {}: {}\n",
        field.name,
        render_type(&field.field_type)
    ));
    Ok(())
}
