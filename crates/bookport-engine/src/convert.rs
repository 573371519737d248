use std::path::Path;

use crate::io::{self, IoError};
use crate::rules::RuleSet;

/// Replace every Leanpub admonition marker in `content` with a MkDocs block
/// header.
///
/// Each rule's marker plus one trailing space is matched as literal text,
/// anywhere in the document, and every non-overlapping occurrence becomes
/// `!!! <kind>` followed by a blank line and a four-space indent. Rules run
/// in order against the progressively updated text; since no replacement
/// introduces a marker token, no cascading occurs in practice.
///
/// Only the first line of an admonition gets the indent. Continuation lines
/// of a multi-line block are left as-is, which matches the source tool's
/// behaviour; re-indenting the whole block would need structural parsing
/// that is out of scope here.
pub fn convert_text(content: &str, rules: &RuleSet) -> String {
    let mut text = content.to_string();
    for rule in rules.iter() {
        let pattern = format!("{} ", rule.marker());
        let replacement = format!("!!! {}\n\n    ", rule.kind());
        text = text.replace(&pattern, &replacement);
    }
    text
}

/// Convert every eligible manuscript file from `source_dir` into
/// `output_dir`.
///
/// The output directory is created if absent. Each source file is read in
/// full, converted, and written under the same filename, overwriting any
/// file from a previous run. Files are processed sequentially in filename
/// order; the first I/O failure aborts the whole run.
pub fn convert_manuscript(
    source_dir: &Path,
    output_dir: &Path,
    rules: &RuleSet,
) -> Result<(), IoError> {
    io::ensure_output_dir(output_dir)?;

    let sources = io::list_eligible_sources(source_dir)?;
    for source_path in &sources {
        let content = io::read_file(source_path)?;
        let converted = convert_text(&content, rules);

        // list_eligible_sources only yields paths with filenames
        let file_name = source_path
            .file_name()
            .expect("eligible source has a filename");
        let output_path = output_dir.join(file_name);
        io::write_file(&output_path, &converted)?;
        log::debug!(
            "converted {} -> {}",
            source_path.display(),
            output_path.display()
        );
    }
    log::info!(
        "converted {} file(s) from {} to {}",
        sources.len(),
        source_dir.display(),
        output_dir.display()
    );

    Ok(())
}
