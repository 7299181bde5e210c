use offer_letter_server::application::model::ApplicationForm;
use offer_letter_server::generators::validate;

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

#[test]
fn test_valid_form_passes() {
    assert!(validate(&valid_form()).is_ok());
}

#[test]
fn test_name_with_digits_is_rejected() {
    let mut form = valid_form();
    form.first_name = "John3".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.message, "First and Last names should only include characters.");
}

#[test]
fn test_plain_name_is_accepted() {
    let mut form = valid_form();
    form.first_name = "John".to_string();
    assert!(validate(&form).is_ok());
}

#[test]
fn test_empty_name_is_rejected() {
    let mut form = valid_form();
    form.last_name = "".to_string();
    assert!(validate(&form).is_err());
}

#[test]
fn test_mobile_with_letters_is_rejected() {
    let mut form = valid_form();
    form.mobile_number = "98765abc10".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.field, "mobile_number");
}

#[test]
fn test_aadhaar_wrong_grouping_is_rejected() {
    let mut form = valid_form();
    form.aadhaar_number = "1234-567-8901".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.field, "aadhaar_number");
}

#[test]
fn test_aadhaar_correct_grouping_is_accepted() {
    let mut form = valid_form();
    form.aadhaar_number = "1234-5678-9012".to_string();
    assert!(validate(&form).is_ok());
}

#[test]
fn test_aadhaar_trailing_garbage_is_rejected() {
    // Patterns are anchored at both ends, so a well-formed prefix followed
    // by extra characters does not pass.
    let mut form = valid_form();
    form.aadhaar_number = "1234-5678-9012-3456".to_string();
    assert!(validate(&form).is_err());
}

#[test]
fn test_lowercase_pan_is_rejected() {
    let mut form = valid_form();
    form.pan_number = "abcde1234e".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.field, "pan_number");
}

#[test]
fn test_uppercase_pan_is_accepted() {
    let mut form = valid_form();
    form.pan_number = "ABCDE1234E".to_string();
    assert!(validate(&form).is_ok());
}

#[test]
fn test_email_without_dot_is_rejected() {
    let mut form = valid_form();
    form.email_address = "jane@example".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.field, "email_address");
}

#[test]
fn test_email_with_two_ats_is_rejected() {
    let mut form = valid_form();
    form.email_address = "jane@doe@example.com".to_string();
    assert!(validate(&form).is_err());
}

#[test]
fn test_first_violation_wins() {
    // Name and mobile are both invalid; the name rule is checked first.
    let mut form = valid_form();
    form.first_name = "J4ne".to_string();
    form.mobile_number = "not-a-number".to_string();
    let err = validate(&form).unwrap_err();
    assert_eq!(err.field, "first_name/last_name");
}

#[test]
fn test_fields_are_trimmed_before_checking() {
    let mut form = valid_form();
    form.first_name = "  Jane  ".to_string();
    form.pan_number = " ABCDE1234E ".to_string();
    assert!(validate(&form).is_ok());
}
