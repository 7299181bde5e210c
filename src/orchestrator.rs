//! Generation pipeline: validate, allocate an identifier, assemble content
//! and render the six documents into their deterministic folder layout.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::model::ApplicationForm;
use crate::employee_id::{EmployeeIdAllocator, StorageError};
use crate::generators::common::format_letter_date;
use crate::generators::templates;
use crate::generators::{validate, DocumentContent, DocumentRenderer, RenderError, ValidationError};

pub const EMPLOYER_ROOT: &str = "Employer";
pub const EMPLOYEE_ROOT: &str = "Employee";
pub const EMPLOYEE_LETTER_FILE: &str = "Offer_Letter_Employee.pdf";

/// Failure modes of one generation, in pipeline order.
///
/// Validation failures happen before anything is allocated or written.
/// Storage and render failures after allocation may leave a gap in the
/// identifier sequence and a partially populated folder; neither is rolled
/// back.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Locations of the documents produced for one submission. The employee
/// folder is the primary result handed back to the submitter.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentSet {
    pub employee_id: u64,
    pub employer_folder: String,
    pub employee_folder: String,
    pub employer_files: Vec<String>,
    pub employee_files: Vec<String>,
}

/// Composes the validator, allocator, assembler and renderer.
pub struct GenerationOrchestrator {
    allocator: EmployeeIdAllocator,
    renderer: Arc<dyn DocumentRenderer>,
    output_root: PathBuf,
    logo: Option<PathBuf>,
}

impl GenerationOrchestrator {
    pub fn new(
        allocator: EmployeeIdAllocator,
        renderer: Arc<dyn DocumentRenderer>,
        output_root: impl Into<PathBuf>,
        logo: Option<PathBuf>,
    ) -> Self {
        Self {
            allocator,
            renderer,
            output_root: output_root.into(),
            logo,
        }
    }

    /// Run the full pipeline for one submitted form.
    pub fn generate(&self, form: &ApplicationForm) -> Result<DocumentSet, GenerationError> {
        validate(form)?;

        let employee_id = self.allocator.next_id()?;
        let slug = form.folder_slug(employee_id);
        log::info!("allocated employee id {employee_id} for {}", form.full_name());

        let employer_dir = self.output_root.join(EMPLOYER_ROOT).join(&slug);
        let employee_dir = self.output_root.join(EMPLOYEE_ROOT).join(&slug);
        create_folder(&employer_dir)?;
        create_folder(&employee_dir)?;

        let body = templates::offer_letter_body(form);

        let employer_file = format!("{slug}.pdf");
        self.renderer.render(
            &self.employer_letter(form, employee_id, &body),
            &employer_dir.join(&employer_file),
        )?;

        self.renderer.render(
            &self.employee_letter(form, &body),
            &employee_dir.join(EMPLOYEE_LETTER_FILE),
        )?;

        let mut employee_files = vec![EMPLOYEE_LETTER_FILE.to_string()];
        for (filename, text) in templates::ANNEXURES {
            let content = DocumentContent {
                body: text.to_string(),
                ..DocumentContent::default()
            };
            self.renderer.render(&content, &employee_dir.join(filename))?;
            employee_files.push(filename.to_string());
        }

        Ok(DocumentSet {
            employee_id,
            employer_folder: employer_dir.to_string_lossy().into_owned(),
            employee_folder: employee_dir.to_string_lossy().into_owned(),
            employer_files: vec![employer_file],
            employee_files,
        })
    }

    fn letterhead_cells(&self) -> Vec<String> {
        let mut cells = vec![templates::COMPANY_NAME.to_string()];
        cells.extend(templates::COMPANY_ADDRESS_LINES.iter().map(|s| s.to_string()));
        cells.push(format!("Date: {}", format_letter_date()));
        cells
    }

    /// Employer copy: full address and contact block, the government ID
    /// numbers and the allocated identifier above the legal body.
    fn employer_letter(
        &self,
        form: &ApplicationForm,
        employee_id: u64,
        body: &str,
    ) -> DocumentContent {
        DocumentContent {
            header_image: self.logo.clone(),
            header_cells: self.letterhead_cells(),
            detail_cells: vec![
                format!("Mr/Ms. {}", form.full_name()),
                format!(
                    "{}, {}, {}",
                    form.address_line1.trim(),
                    form.street.trim(),
                    form.area.trim()
                ),
                format!(
                    "{} - {}, {}",
                    form.city.trim(),
                    form.zipcode.trim(),
                    form.country.trim()
                ),
                format!("Tel# {}", form.mobile_number.trim()),
                format!("Email: {}", form.email_address.trim()),
                format!("Aadhaar Card Number: {}", form.aadhaar_number.trim()),
                format!("PAN Number: {}", form.pan_number.trim()),
                format!("Employee ID: {employee_id}"),
            ],
            subject: Some(templates::SUBJECT_LINE.to_string()),
            body: body.to_string(),
            signature: Some(templates::SIGNATURE_BLOCK.to_string()),
        }
    }

    /// Employee copy: salutation, position and joining date, then the same
    /// legal body.
    fn employee_letter(&self, form: &ApplicationForm, body: &str) -> DocumentContent {
        DocumentContent {
            header_image: self.logo.clone(),
            header_cells: self.letterhead_cells(),
            detail_cells: vec![
                format!("Dear {},", form.full_name()),
                format!("Position: {}", form.designation.trim()),
                format!("Date of Joining: {}", form.date_of_joining.trim()),
            ],
            subject: None,
            body: body.to_string(),
            signature: Some(templates::SIGNATURE_BLOCK.to_string()),
        }
    }
}

fn create_folder(path: &Path) -> Result<(), StorageError> {
    // Idempotent: an already existing folder is not an error.
    fs::create_dir_all(path).map_err(|source| StorageError::CreateFolder {
        path: path.to_path_buf(),
        source,
    })
}
