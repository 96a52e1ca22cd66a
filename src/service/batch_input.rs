use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use serde_json::Value;

use super::controller::split_batch_lines;

/// Texts for a batch run as read from a file or stdin.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchInput {
    /// One text per non-blank line.
    Lines(Vec<String>),
    /// A JSON document, expected to be an array of strings.
    Json(Value),
}

impl BatchInput {
    /// Reads `file`, or stdin when no file is given. Files with a `.json`
    /// extension are parsed as JSON; everything else is split into lines.
    pub fn read(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read batch file {}", path.display()))?;
                Self::parse(&contents, is_json_path(path))
            }
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read batch from stdin")?;
                Self::parse(&buffer, false)
            }
        }
    }

    pub fn parse(contents: &str, as_json: bool) -> Result<Self> {
        if as_json {
            let value = serde_json::from_str(contents).context("batch file is not valid JSON")?;
            Ok(BatchInput::Json(value))
        } else {
            Ok(BatchInput::Lines(split_batch_lines(contents)))
        }
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
