use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of generated documentation pages.
pub const REST_EXTENSION: &str = "rst";

/// Derive the output file name for an AVPR input.
///
/// Strips the directory and the last extension, then appends `.rst`,
/// so `schemas/mail.avpr` becomes `mail.rst`.
pub fn rest_file_name(input: &Path) -> Result<String> {
    let stem = input
        .file_stem()
        .ok_or_else(|| Error::InvalidInputPath(input.to_path_buf()))?;
    Ok(format!("{}.{REST_EXTENSION}", stem.to_string_lossy()))
}

/// Full output path for `input` inside `output_dir`.
pub fn rest_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    Ok(output_dir.join(rest_file_name(input)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mail.avpr", "mail.rst")]
    #[case("schemas/mail.avpr", "mail.rst")]
    #[case("/abs/dir/protocol.v2.avpr", "protocol.v2.rst")]
    #[case("no_extension", "no_extension.rst")]
    #[case(".hidden", ".hidden.rst")]
    fn derives_rest_file_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rest_file_name(Path::new(input)).unwrap(), expected);
    }

    #[test]
    fn rejects_paths_without_file_name() {
        assert!(matches!(
            rest_file_name(Path::new("/")),
            Err(Error::InvalidInputPath(_))
        ));
    }

    #[test]
    fn joins_output_directory() {
        let path = rest_output_path(Path::new("in/a.avpr"), Path::new("out")).unwrap();
        assert_eq!(path, Path::new("out").join("a.rst"));
    }
}
