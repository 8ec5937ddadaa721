use digestica_export::docx::generate_docx;
use digestica_export::styles::DocumentStyles;

#[test]
fn empty_input_still_builds_a_document() {
    let bytes = generate_docx("", &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn markdown_subset_builds() {
    let rendered = "\
# Titel
## Sectie
- **vet** en normaal
| A | B |
|---|:-:|
| 1 | **2** |
---
Laatste regel met **open vet";
    let styles = DocumentStyles {
        margin_inches: 1.0,
        ..DocumentStyles::default()
    };
    let bytes = generate_docx(rendered, &styles).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn margins_convert_to_twips() {
    let styles = DocumentStyles {
        margin_inches: 0.75,
        ..DocumentStyles::default()
    };
    assert_eq!(styles.margin_twips(), 1080);
}
