//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source to temporary files,
//! invoking the compiler, and placing the output PDF at its target path.
//! Everything above this module only speaks `DocumentContent`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

use super::common::escape_typst_string;
use super::RenderError;

const SOURCE_FILE: &str = "letter.typ";

/// Assembled content blocks for one document.
///
/// Header cells render centered, detail cells left-aligned; the subject
/// line and the signature block render bold. Annexures use only `body`.
#[derive(Debug, Clone, Default)]
pub struct DocumentContent {
    pub header_image: Option<PathBuf>,
    pub header_cells: Vec<String>,
    pub detail_cells: Vec<String>,
    pub subject: Option<String>,
    pub body: String,
    pub signature: Option<String>,
}

/// Boundary to the artifact renderer. Production uses [`TypstRenderer`];
/// tests inject a stub so no Typst binary is needed.
pub trait DocumentRenderer: Send + Sync {
    /// Materialize `content` as a PDF at `target`.
    fn render(&self, content: &DocumentContent, target: &Path) -> Result<(), RenderError>;
}

/// Renders documents by generating Typst source and shelling out to the
/// `typst` CLI.
#[derive(Debug, Default)]
pub struct TypstRenderer;

impl DocumentRenderer for TypstRenderer {
    fn render(&self, content: &DocumentContent, target: &Path) -> Result<(), RenderError> {
        let temp_dir = tempdir().map_err(RenderError::TempDir)?;

        // The compiler resolves images relative to the source file, so the
        // header image is staged next to it.
        let staged_image = match &content.header_image {
            Some(image) => {
                let ext = image.extension().and_then(|e| e.to_str()).unwrap_or("jpg");
                let staged = format!("letterhead.{ext}");
                fs::copy(image, temp_dir.path().join(&staged))
                    .map_err(RenderError::StageAsset)?;
                Some(staged)
            }
            None => None,
        };

        let source = build_source(content, staged_image.as_deref());
        let typ_path = temp_dir.path().join(SOURCE_FILE);
        fs::write(&typ_path, source).map_err(RenderError::WriteSource)?;

        let output_path = temp_dir.path().join("output.pdf");
        let status = Command::new("typst")
            .arg("compile")
            .arg(&typ_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .status()
            .map_err(RenderError::TypstIo)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(RenderError::TypstExit(code));
        }

        fs::copy(&output_path, target).map_err(|source| RenderError::PersistPdf {
            path: target.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Build the complete Typst source for one document.
///
/// Narrow 10pt body, bold 12pt signature; blank lines in the body become
/// vertical gaps so the narrative keeps its paragraph structure.
fn build_source(content: &DocumentContent, staged_image: Option<&str>) -> String {
    let mut src = String::new();
    src.push_str("#set page(paper: \"a4\", margin: (x: 1.8cm, y: 1.5cm))\n");
    src.push_str("#set text(size: 10pt)\n");
    src.push_str("#set par(justify: true)\n\n");

    if let Some(image) = staged_image {
        src.push_str(&format!(
            "#align(center)[#image(\"{image}\", width: 33mm)]\n#v(10pt)\n"
        ));
    }

    if !content.header_cells.is_empty() {
        src.push_str("#align(center)[\n");
        for cell in &content.header_cells {
            src.push_str(&format!("  #\"{}\" \\\n", escape_typst_string(cell)));
        }
        src.push_str("]\n#v(6pt)\n");
    }

    for cell in &content.detail_cells {
        src.push_str(&format!("#\"{}\" \\\n", escape_typst_string(cell)));
    }
    if !content.detail_cells.is_empty() {
        src.push_str("#v(6pt)\n");
    }

    if let Some(subject) = &content.subject {
        src.push_str(&format!(
            "#text(weight: \"bold\")[#\"{}\"]\n#v(6pt)\n",
            escape_typst_string(subject)
        ));
    }

    push_lines(&mut src, &content.body, "");

    if let Some(signature) = &content.signature {
        src.push_str("#v(10pt)\n#text(weight: \"bold\", size: 12pt)[\n");
        push_lines(&mut src, signature, "  ");
        src.push_str("]\n");
    }

    src
}

fn push_lines(src: &mut String, text: &str, indent: &str) {
    for line in text.lines() {
        if line.trim().is_empty() {
            src.push_str(indent);
            src.push_str("#v(4pt)\n");
        } else {
            src.push_str(&format!(
                "{indent}#\"{}\" \\\n",
                escape_typst_string(line)
            ));
        }
    }
}
