//! Form parsing tests — covers the serde shapes of the step forms and the
//! hand-rolled pair parser behind the cut page's dynamic section rows.

use pathguide::workflow::forms::{CutForm, DocumentForm, ReceiveForm};

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn receive_form_defaults_missing_fields() {
    let form: ReceiveForm =
        serde_urlencoded::from_str("accession_number=S24-12345&patient_name=Doe%2C+Jane")
            .expect("Failed to parse form");

    assert_eq!(form.accession_number, "S24-12345");
    assert_eq!(form.patient_name, "Doe, Jane");
    assert!(form.specimen_type.is_empty());
    assert_eq!(form.priority, "routine");
}

#[test]
fn receive_form_prefills_received_time() {
    let form = ReceiveForm::prefilled();

    assert_eq!(form.priority, "routine");
    // datetime-local value, e.g. 2026-08-30T14:05
    assert!(form.received_time.contains('T'));
    assert_eq!(form.received_time.len(), 16);
}

#[test]
fn document_checkbox_is_present_only_when_checked() {
    let unchecked: DocumentForm =
        serde_urlencoded::from_str("dimensions=1+cm").expect("Failed to parse form");
    assert!(!unchecked.photographs_taken());
    assert_eq!(unchecked.fixation_type, "formalin");

    let checked: DocumentForm =
        serde_urlencoded::from_str("dimensions=1+cm&photographs=yes").expect("Failed to parse form");
    assert!(checked.photographs_taken());
}

#[test]
fn cut_form_parses_scalar_fields_and_section_rows() {
    let body = pairs(&[
        ("action", "complete"),
        ("orientation", "Anterior surface marked"),
        ("margins", "Clear grossly"),
        ("sectioning_protocol", "Serial transverse sections"),
        ("cassette_1", "A1"),
        ("location_1", "Central area with lesion"),
        ("description_1", "Representative section"),
        ("cassette_2", "B1"),
        ("location_2", "Deep margin"),
        ("description_2", "Margin section"),
        ("special_stains", ""),
        ("notes", ""),
    ]);

    let form = CutForm::from_pairs(&body);

    assert_eq!(form.action, "complete");
    assert_eq!(form.orientation, "Anterior surface marked");
    assert_eq!(form.sections.len(), 2);

    let sections: Vec<_> = form.sections.iter().collect();
    assert_eq!(sections[0].id, 1);
    assert_eq!(sections[0].cassette, "A1");
    assert_eq!(sections[0].location, "Central area with lesion");
    assert_eq!(sections[1].id, 2);
    assert_eq!(sections[1].description, "Margin section");
}

#[test]
fn cut_form_orders_rows_by_id_regardless_of_pair_order() {
    let body = pairs(&[
        ("location_2", "Deep margin"),
        ("description_2", "Margin section"),
        ("location_1", "Central area"),
        ("description_1", "Representative section"),
    ]);

    let form = CutForm::from_pairs(&body);

    let ids: Vec<u32> = form.sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn cut_form_ignores_unknown_keys() {
    let body = pairs(&[
        ("location_1", "Central area"),
        ("description_1", "Representative section"),
        ("bogus", "value"),
        ("location_x", "not a row"),
        ("color_3", "not a section field"),
    ]);

    let form = CutForm::from_pairs(&body);

    assert_eq!(form.sections.len(), 1);
}

#[test]
fn cut_form_with_no_rows_keeps_one_blank_section() {
    let form = CutForm::from_pairs(&pairs(&[("action", "complete")]));

    assert_eq!(form.sections.len(), 1);
    let first = form.sections.iter().next().expect("first section");
    assert!(first.location.is_empty());
}
