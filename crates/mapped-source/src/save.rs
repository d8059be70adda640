//! Writing an editable buffer and its `.map` file to disk

use crate::codec::SourceMapGenerator;
use crate::editable::EditableMappedSource;
use crate::error::{Error, Result};
use crate::types::MappedPoint;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::ffi::OsString;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// A `sourceMappingURL` comment with the blanks before it and the line break
/// after it
static MAPPING_URL_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*//# sourceMappingURL=[^\n]*\n?").unwrap());

/// Options for [`EditableMappedSource::save_with_options`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SaveOptions {
    /// Value of the map's `sourceRoot` field
    pub source_root: String,
    /// Pretty-print the map JSON with two-space indentation
    pub pretty: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            source_root: String::new(),
            pretty: true,
        }
    }
}

/// The `.map` file that goes with `path`: the same name plus `.map`
pub fn map_path_for(path: &Path) -> PathBuf {
    let mut map_path = OsString::from(path.as_os_str());
    map_path.push(".map");
    PathBuf::from(map_path)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl EditableMappedSource {
    /// Save the text to `path` and the map to `path` + `.map`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_options(path, &SaveOptions::default())
    }

    pub fn save_with_options(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        let map_path = map_path_for(path);

        let output = self.with_mapping_url(&file_name(&map_path));

        let mut generator = SourceMapGenerator::new(file_name(path), options.source_root.clone());
        output.write_mappings(&mut generator)?;
        let json = generator.to_json(options.pretty)?;

        std::fs::write(path, output.text()).map_err(|e| Error::io(path, e))?;
        std::fs::write(&map_path, json).map_err(|e| Error::io(&map_path, e))?;

        tracing::debug!(
            file = %path.display(),
            map_file = %map_path.display(),
            points = output.points().len(),
            "Saved mapped source"
        );
        Ok(())
    }

    /// A copy of this buffer ending in exactly one `sourceMappingURL` comment.
    ///
    /// Existing comments are removed and later points move up with the text.
    /// A comment on its own line goes with its line break; one that follows
    /// code on the same line goes with the blanks before it, and the code and
    /// line break stay. Points inside a removed span are dropped, except one
    /// at its very start. Points at the end of the text stay before the new
    /// comment.
    pub fn with_mapping_url(&self, url: &str) -> EditableMappedSource {
        let spans = comment_spans(self.text());

        let mut text = String::with_capacity(self.len() + url.len() + 24);
        let mut kept_from = 0;
        for span in &spans {
            text.push_str(&self.text()[kept_from..span.start]);
            kept_from = span.end;
        }
        text.push_str(&self.text()[kept_from..]);

        let points = self
            .points()
            .iter()
            .filter_map(|point| {
                let mut removed = 0;
                for span in &spans {
                    if point.offset >= span.end {
                        removed += span.len();
                    } else if point.offset > span.start {
                        return None;
                    } else {
                        break;
                    }
                }
                Some(MappedPoint {
                    offset: point.offset - removed,
                    ..point.clone()
                })
            })
            .collect();

        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&format!("//# sourceMappingURL={}\n", url));
        EditableMappedSource::from_parts(text, points)
    }
}

/// Byte ranges to cut for every `sourceMappingURL` comment in `text`
fn comment_spans(text: &str) -> Vec<Range<usize>> {
    MAPPING_URL_COMMENT
        .find_iter(text)
        .map(|m| {
            let range = m.range();
            let starts_line = range.start == 0 || text.as_bytes()[range.start - 1] == b'\n';
            if starts_line {
                range
            } else {
                // Keep the line break after the code
                range.start..range.start + m.as_str().trim_end_matches(['\r', '\n']).len()
            }
        })
        .collect()
}
