pub mod definitions;
pub mod docs;
pub mod types;

pub use docs::{normalize_doc, DocConverter, Pandoc};
pub use types::render_type;

use definitions::render_definition;

use std::fs;
use std::path::{Path, PathBuf};

use crate::avro::Protocol;
use crate::common::{rest_output_path, section_title, TITLE_UNDERLINE};
use crate::error::{ConvertError, Error, Result};

/// Render a decoded protocol as a complete reST page.
///
/// Layout: the protocol name as a `*`-underlined title, the protocol doc,
/// then one `.. avro:<type>::` directive block per type in declaration
/// order. Docs are converted with `converter`.
pub fn render_protocol<C>(
    protocol: &Protocol,
    converter: &C,
) -> std::result::Result<String, ConvertError>
where
    C: DocConverter + ?Sized,
{
    let mut output = section_title(&protocol.name, TITLE_UNDERLINE);
    output.push_str("\n\n");

    if let Some(doc) = &protocol.doc {
        output.push_str(&normalize_doc(converter, doc, 0)?);
        output.push_str("\n\n");
    }

    for definition in &protocol.types {
        render_definition(&mut output, definition, converter)?;
    }

    Ok(output)
}

/// Read and decode one AVPR file.
pub fn read_protocol(path: &Path) -> Result<Protocol> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert one AVPR file into `<output_dir>/<stem>.rst`.
///
/// The page is rendered completely before the file is opened; an existing
/// file is overwritten. Returns the written path.
pub fn convert_avpr_file<C>(input: &Path, output_dir: &Path, converter: &C) -> Result<PathBuf>
where
    C: DocConverter + ?Sized,
{
    let rest_path = rest_output_path(input, output_dir)?;
    let protocol = read_protocol(input)?;
    let rest = render_protocol(&protocol, converter)?;

    fs::write(&rest_path, rest).map_err(|source| Error::Write {
        path: rest_path.clone(),
        source,
    })?;
    tracing::info!(input = %input.display(), output = %rest_path.display(), "converted protocol");

    Ok(rest_path)
}

/// Convert AVPR files in order, stopping at the first failure.
///
/// Files converted before the failing one are left in place; later inputs
/// are not touched. The output directory must already exist.
pub fn convert_avpr_to_rest<P, C>(
    inputs: &[P],
    output_dir: &Path,
    converter: &C,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    C: DocConverter + ?Sized,
{
    inputs
        .iter()
        .map(|input| convert_avpr_file(input.as_ref(), output_dir, converter))
        .collect()
}

/// [`convert_avpr_to_rest`] with docs converted by `pandoc` from `PATH`.
pub fn convert_avpr_files<P: AsRef<Path>>(inputs: &[P], output_dir: &Path) -> Result<Vec<PathBuf>> {
    convert_avpr_to_rest(inputs, output_dir, &Pandoc::new())
}
