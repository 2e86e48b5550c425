//! End-to-end stub generation tests.

use flatstub::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_subset_matches_reference_output() {
    let stub = generate_from_file(
        &fixture("steam_api_subset.json"),
        &GeneratorConfig::default(),
    )
    .expect("generate");
    let expected =
        std::fs::read_to_string(fixture("steamworks_stub_subset.cpp")).expect("read fixture");

    assert_eq!(stub.code, expected);
}

#[test]
fn test_subset_report() {
    let stub = generate_from_file(
        &fixture("steam_api_subset.json"),
        &GeneratorConfig::default(),
    )
    .expect("generate");
    let report = stub.report;

    assert_eq!(report.accessors, 3);
    assert_eq!(report.interface_methods, 12);
    assert_eq!(report.struct_methods, 5);
    assert_eq!(report.skipped_methods, 2);
    assert_eq!(
        report.unhandled,
        vec![UnhandledReturn {
            function: "SteamAPI_ISteamUser_RequestEncryptedAppTicket".to_string(),
            type_name: "uint64".to_string(),
        }]
    );
}

#[test]
fn test_subset_strict_reports_chained_alias() {
    let result = generate_from_file(
        &fixture("steam_api_subset.json"),
        &GeneratorConfig::new().strict(),
    );
    match result {
        Err(CodegenError::UnknownReturnType {
            function,
            type_name,
        }) => {
            assert_eq!(function, "SteamAPI_ISteamUser_RequestEncryptedAppTicket");
            assert_eq!(type_name, "uint64");
        }
        other => panic!("expected UnknownReturnType, got {:?}", other.map(|s| s.code)),
    }
}

#[test]
fn test_accessor_before_method() {
    let json = r#"{
        "typedefs": [ { "typedef": "Foo_t", "type": "int" } ],
        "interfaces": [ {
            "classname": "IBar",
            "accessors": [ { "name_flat": "Bar" } ],
            "methods": [ { "methodname_flat": "Bar_DoThing", "returntype": "Foo_t", "params": [] } ]
        } ],
        "structs": []
    }"#;
    let stub = generate_from_json(json, &GeneratorConfig::default()).expect("generate");

    let accessor = "S_API IBar *Bar(){ return nullptr; }\n\n";
    let method = "S_API Foo_t Bar_DoThing(IBar * self) {\n\treturn 0;\n}\n\n";
    let accessor_at = stub.code.find(accessor).expect("accessor");
    let method_at = stub.code.find(method).expect("method");
    assert!(accessor_at < method_at);
}

#[test]
fn test_generate_to_file_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("steamworks_stub.gen.cpp");
    let config = GeneratorConfig::default();

    generate_to_file(&fixture("steam_api_subset.json"), &output, &config).expect("first run");
    let first = std::fs::read(&output).expect("read");
    generate_to_file(&fixture("steam_api_subset.json"), &output, &config).expect("second run");
    let second = std::fs::read(&output).expect("read");

    assert_eq!(first, second);
}

#[test]
fn test_call_type_applies_to_every_function() {
    let config = GeneratorConfig::new().call_type("S_CALLTYPE");
    let stub = generate_from_file(&fixture("steam_api_subset.json"), &config).expect("generate");

    let functions = stub
        .code
        .lines()
        .filter(|line| line.starts_with("S_API "))
        .collect::<Vec<_>>();
    assert_eq!(functions.len(), stub.report.functions());
    assert!(functions.iter().all(|line| line.contains("S_CALLTYPE ")));
    assert!(stub.code.contains("S_API ISteamUser *S_CALLTYPE SteamAPI_SteamUser_v023()"));
}
