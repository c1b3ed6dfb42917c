use std::{fs, io, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref SOURCE_EXTENSION: Regex = Regex::new(r"\.(rens|rn)$").unwrap();
}

#[derive(Error, Debug)]
pub enum SourceFileError {
    #[error("FileNotSupported: unrecognized file extension '{path}'")]
    UnsupportedExtension { path: String },
    #[error("FileNotFound: '{path}'")]
    NotFound { path: String },
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Whether `path` names a source file, `*.rens` or `*.rn`.
pub fn has_supported_extension(path: &Path) -> bool {
    SOURCE_EXTENSION.is_match(&path.to_string_lossy())
}

/// Reads a source file after checking its extension.
pub fn load_source(path: &Path) -> Result<String, SourceFileError> {
    let display = path.display().to_string();

    if !has_supported_extension(path) {
        return Err(SourceFileError::UnsupportedExtension { path: display });
    }

    fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => SourceFileError::NotFound { path: display },
        _ => SourceFileError::Read {
            path: display,
            source: error,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::Path};

    use super::{has_supported_extension, load_source, SourceFileError};

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension(Path::new("main.rens")));
        assert!(has_supported_extension(Path::new("dir/lib.rn")));
        assert!(!has_supported_extension(Path::new("main.rs")));
        assert!(!has_supported_extension(Path::new("main.rens.txt")));
        assert!(!has_supported_extension(Path::new("rens")));
    }

    #[test]
    fn test_load_rejects_extension_before_reading() {
        let result = load_source(Path::new("does-not-exist.txt"));

        assert!(matches!(
            result,
            Err(SourceFileError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_source(Path::new("does-not-exist.rens"));

        assert!(matches!(result, Err(SourceFileError::NotFound { .. })));
    }

    #[test]
    fn test_load_source() {
        let path = env::temp_dir().join(format!("renaisscript-load-{}.rn", std::process::id()));
        fs::write(&path, "count x = 1;\n").unwrap();

        let contents = load_source(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(contents.unwrap(), "count x = 1;\n");
    }
}
