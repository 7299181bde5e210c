use std::fs;
use std::path::Path;
use std::sync::Arc;

use offer_letter_server::application::model::ApplicationForm;
use offer_letter_server::employee_id::{EmployeeIdAllocator, FileCounterStore};
use offer_letter_server::generators::{DocumentContent, DocumentRenderer, RenderError};
use offer_letter_server::orchestrator::{GenerationError, GenerationOrchestrator};
use tempfile::{tempdir, TempDir};

/// Renderer stand-in that writes the assembled body instead of invoking
/// Typst, so folder layout and content can be asserted on directly.
struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn render(&self, content: &DocumentContent, target: &Path) -> Result<(), RenderError> {
        fs::write(target, content.body.as_bytes()).map_err(|source| RenderError::PersistPdf {
            path: target.to_path_buf(),
            source,
        })
    }
}

fn valid_form() -> ApplicationForm {
    ApplicationForm {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        mobile_number: "9876543210".to_string(),
        email_address: "jane.doe@example.com".to_string(),
        aadhaar_number: "1234-5678-9012".to_string(),
        pan_number: "ABCDE1234E".to_string(),
        address_line1: "Flat 4B".to_string(),
        street: "MG Road".to_string(),
        area: "Central".to_string(),
        city: "Mumbai".to_string(),
        zipcode: "400001".to_string(),
        country: "India".to_string(),
        designation: "Android Developer".to_string(),
        date_of_joining: "01-Sep-2026".to_string(),
    }
}

fn orchestrator(dir: &TempDir) -> GenerationOrchestrator {
    let allocator = EmployeeIdAllocator::new(FileCounterStore::new(dir.path().join("ids.txt")));
    GenerationOrchestrator::new(allocator, Arc::new(StubRenderer), dir.path(), None)
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_folder_layout_and_file_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ids.txt"), "20000005").unwrap();
    let orchestrator = orchestrator(&dir);

    let set = orchestrator.generate(&valid_form()).unwrap();

    assert_eq!(set.employee_id, 20_000_006);
    let employer_dir = dir.path().join("Employer").join("20000006_Jane_Doe");
    let employee_dir = dir.path().join("Employee").join("20000006_Jane_Doe");
    assert!(employer_dir.is_dir());
    assert!(employee_dir.is_dir());
    assert_eq!(Path::new(&set.employer_folder), employer_dir);
    assert_eq!(Path::new(&set.employee_folder), employee_dir);

    assert_eq!(file_names(&employer_dir), vec!["20000006_Jane_Doe.pdf"]);
    assert_eq!(
        file_names(&employee_dir),
        vec![
            "Annexure_1_Payment_Structure.pdf",
            "Annexure_2_Work_From_Home_Policy.pdf",
            "Annexure_3_Payment_Policy.pdf",
            "Annexure_4_No_Call_No_Show_Policy.pdf",
            "Offer_Letter_Employee.pdf",
        ]
    );
    assert_eq!(set.employee_files.len(), 5);
}

#[test]
fn test_validation_failure_allocates_nothing_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let orchestrator = orchestrator(&dir);

    let mut form = valid_form();
    form.pan_number = "abcde1234e".to_string();
    let err = orchestrator.generate(&form).unwrap_err();
    assert!(matches!(err, GenerationError::Validation(_)));

    assert!(!dir.path().join("ids.txt").exists(), "no identifier leaked");
    assert!(!dir.path().join("Employer").exists());
    assert!(!dir.path().join("Employee").exists());
}

#[test]
fn test_identical_names_never_collide() {
    let dir = tempdir().unwrap();
    let orchestrator = orchestrator(&dir);

    let first = orchestrator.generate(&valid_form()).unwrap();
    let second = orchestrator.generate(&valid_form()).unwrap();

    assert_ne!(first.employee_id, second.employee_id);
    assert_ne!(first.employee_folder, second.employee_folder);
    assert!(Path::new(&first.employee_folder).is_dir());
    assert!(Path::new(&second.employee_folder).is_dir());
}

#[test]
fn test_annexures_are_byte_identical_across_submissions() {
    let dir = tempdir().unwrap();
    let orchestrator = orchestrator(&dir);

    let first = orchestrator.generate(&valid_form()).unwrap();
    let mut other = valid_form();
    other.first_name = "John".to_string();
    other.designation = "Backend Developer".to_string();
    let second = orchestrator.generate(&other).unwrap();

    for annexure in [
        "Annexure_1_Payment_Structure.pdf",
        "Annexure_2_Work_From_Home_Policy.pdf",
        "Annexure_3_Payment_Policy.pdf",
        "Annexure_4_No_Call_No_Show_Policy.pdf",
    ] {
        let a = fs::read(Path::new(&first.employee_folder).join(annexure)).unwrap();
        let b = fs::read(Path::new(&second.employee_folder).join(annexure)).unwrap();
        assert_eq!(a, b, "{annexure} differs between submissions");
    }
}

#[test]
fn test_letter_body_carries_substituted_values() {
    let dir = tempdir().unwrap();
    let orchestrator = orchestrator(&dir);

    let set = orchestrator.generate(&valid_form()).unwrap();
    let letter = fs::read_to_string(
        Path::new(&set.employee_folder).join("Offer_Letter_Employee.pdf"),
    )
    .unwrap();
    assert!(letter.contains("position of Android Developer"));
    assert!(letter.contains("start date is 01-Sep-2026"));
}

#[test]
fn test_sequential_generations_return_increasing_ids() {
    let dir = tempdir().unwrap();
    let orchestrator = orchestrator(&dir);

    let ids: Vec<u64> = (0..5)
        .map(|_| orchestrator.generate(&valid_form()).unwrap().employee_id)
        .collect();
    for pair in ids.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
}

#[test]
fn test_pre_existing_folders_are_tolerated() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Employer").join("20000001_Jane_Doe")).unwrap();
    fs::create_dir_all(dir.path().join("Employee").join("20000001_Jane_Doe")).unwrap();
    let orchestrator = orchestrator(&dir);

    let set = orchestrator.generate(&valid_form()).unwrap();
    assert_eq!(set.employee_id, 20_000_001);
    assert!(Path::new(&set.employee_folder).is_dir());
}
