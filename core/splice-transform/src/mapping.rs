//! Line-oriented `key: value` mapping files.
//!
//! Only lines starting with an ASCII letter are entries; everything else
//! (comments, blank lines, indented text) is skipped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{TransformError, TransformResult};

const SEPARATOR: &str = ": ";

/// Reads a mapping file from disk.
pub fn read_mapping_file(path: impl AsRef<Path>) -> TransformResult<BTreeMap<String, String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TransformError::MappingFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mapping(BufReader::new(file))
}

/// Parses mapping lines. Later entries overwrite earlier ones with the same key.
pub fn parse_mapping<R: BufRead>(reader: R) -> TransformResult<BTreeMap<String, String>> {
    let mut mapping = BTreeMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }

        let (key, value) =
            line.split_once(SEPARATOR)
                .ok_or_else(|| TransformError::InvalidMappingLine {
                    line: index + 1,
                    content: line.clone(),
                })?;
        mapping.insert(key.to_string(), value.to_string());
    }

    Ok(mapping)
}
