use std::fs;

use kadence_styles::{compile_column_css, compile_row_css, Attributes};

#[test]
fn test_rule_cases() {
    let data = fs::read_to_string("tests/fixtures/rule_cases.json").expect("Failed to read fixtures");
    let fixtures: serde_json::Value = serde_json::from_str(&data).expect("Invalid JSON");
    for f in fixtures.as_array().unwrap() {
        let name = f.get("name").unwrap().as_str().unwrap();
        let kind = f.get("kind").unwrap().as_str().unwrap();
        let unique_id = f.get("uniqueID").unwrap().as_str().unwrap();
        let attrs = Attributes::from_json_object(f.get("attrs").unwrap().as_object().unwrap());
        let expected = f.get("expected").unwrap().as_str().unwrap();

        let css = match kind {
            "row" => compile_row_css(&attrs, unique_id),
            "column" => {
                let index = f.get("index").unwrap().as_u64().unwrap() as usize;
                compile_column_css(&attrs, unique_id, index)
            }
            other => panic!("unknown case kind {}", other),
        };
        assert_eq!(css, expected, "Mismatch for case '{}'", name);
    }
}
