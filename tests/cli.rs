use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kadence-styles"))
}

#[test]
fn prints_style_element_for_file_input() {
    let out = bin().arg("tests/fixtures/page.json").output().expect("run cli");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("<style type=\"text/css\" media=\"all\" id=\"kadence-blocks-frontend\">#kt-layout-id_f3a91c {"));
    assert!(stdout.trim_end().ends_with("</style>"));
}

#[test]
fn raw_css_from_stdin() {
    let mut child = bin()
        .arg("--raw")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br##"[{"blockName":"kadence/rowlayout","attrs":{"uniqueID":"_s","bgColor":"#000"}}]"##)
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim_end(),
        "#kt-layout-id_s {background-color:#000;}"
    );
}

#[test]
fn fingerprint_is_hex_sha256() {
    let out = bin()
        .args(["--fingerprint", "tests/fixtures/page.json"])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    let digest = String::from_utf8(out.stdout).unwrap();
    let digest = digest.trim_end();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn rejects_non_list_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"blockName": "kadence/rowlayout"}"#).unwrap();
    let out = bin().arg(&path).output().expect("run cli");
    assert!(!out.status.success());
}
