mod common;

use common::fixtures::PETSTORE_YAML;
use common::mock_http::{serve_not_found, serve_ok};
use common::spec_files;
use serde_json::{json, Value};
use swaggerize::spec::parse_text;
use swaggerize::spec::SpecFormat;
use swaggerize::{parse, DiskFs, FormatError, HttpVerb, LoadFailure, MemFs, SpecError};

fn petstore_value() -> Value {
    serde_yaml::from_str(PETSTORE_YAML).unwrap()
}

fn petstore_json() -> String {
    serde_json::to_string_pretty(&petstore_value()).unwrap()
}

fn routes_of(spec: &swaggerize::LoadedSpec, resource: &str) -> Vec<(HttpVerb, String)> {
    spec.parsed.resources[resource]
        .iter()
        .map(|e| (e.method, e.route.clone()))
        .collect()
}

#[tokio::test]
async fn test_parse_yaml_from_disk() {
    let file = spec_files::yaml(PETSTORE_YAML);
    let spec = parse(&DiskFs, file.path().to_str().unwrap()).await.unwrap();

    assert_eq!(spec.parsed.basepath.as_deref(), Some("/v1"));
    assert_eq!(
        spec.parsed.resources.keys().collect::<Vec<_>>(),
        vec!["Pets", "Stores"]
    );
    assert_eq!(
        routes_of(&spec, "Pets"),
        vec![
            (HttpVerb::Get, "/pets".to_string()),
            (HttpVerb::Post, "/pets".to_string()),
            (HttpVerb::Get, "/pets/:petId".to_string()),
        ]
    );
    assert_eq!(
        routes_of(&spec, "Stores"),
        vec![(HttpVerb::Put, "/stores/:storeId/owners".to_string())]
    );
    assert_eq!(
        spec.parsed.refs.names().collect::<Vec<_>>(),
        vec!["Pet", "NewPet", "Error", "Owner", "Tag"]
    );
    assert_eq!(spec.parsed.refs.dangling().count(), 0);
    assert_eq!(spec.loaded, petstore_value());
}

#[tokio::test]
async fn test_yaml_and_json_sources_agree() {
    let yaml = spec_files::yaml(PETSTORE_YAML);
    let json = spec_files::json(&petstore_json());

    let from_yaml = parse(&DiskFs, yaml.path().to_str().unwrap()).await.unwrap();
    let from_json = parse(&DiskFs, json.path().to_str().unwrap()).await.unwrap();

    assert_eq!(from_yaml.loaded, from_json.loaded);
    assert_eq!(from_yaml.parsed, from_json.parsed);
}

#[tokio::test]
async fn test_parse_from_memory() {
    let mut fs = MemFs::new();
    fs.write("staged/swagger.yml", PETSTORE_YAML);

    let spec = parse(&fs, "staged/swagger.yml").await.unwrap();
    assert_eq!(spec.parsed.route_count(), 4);
}

#[tokio::test]
async fn test_parse_from_url() {
    let url = serve_ok(&petstore_json(), "swagger.json");
    let spec = parse(&MemFs::new(), &url).await.unwrap();

    assert_eq!(spec.loaded, petstore_value());
    assert_eq!(spec.parsed.route_count(), 4);
}

#[tokio::test]
async fn test_url_non_200_is_a_load_error() {
    let url = serve_not_found("swagger.json");
    let err = parse(&DiskFs, &url).await.unwrap_err();

    match &err {
        SpecError::Load(load) => {
            assert_eq!(load.status(), Some(404));
            assert_eq!(load.source, url);
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!("failed to load swagger from: {url} status: 404")
    );
}

#[tokio::test]
async fn test_unreachable_url_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let url = format!("http://127.0.0.1:{port}/swagger.json");
    let err = parse(&DiskFs, &url).await.unwrap_err();
    assert!(matches!(
        err,
        SpecError::Load(ref e) if matches!(e.failure, LoadFailure::Transport(_))
    ));
}

#[tokio::test]
async fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let path = path.to_str().unwrap();

    let err = parse(&DiskFs, path).await.unwrap_err();
    match &err {
        SpecError::Load(load) => {
            assert!(matches!(load.failure, LoadFailure::Io(_)));
            assert_eq!(load.source, path);
        }
        other => panic!("expected load error, got {other:?}"),
    }
    assert!(err.to_string().starts_with(&format!("failed to load swagger from: {path}")));
}

#[tokio::test]
async fn test_unreadable_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let path = path.to_str().unwrap();

    let err = parse(&DiskFs, path).await.unwrap_err();
    assert!(matches!(
        err,
        SpecError::Load(ref e) if matches!(e.failure, LoadFailure::Unreadable)
    ));
    assert_eq!(err.to_string(), format!("failed to load swagger from: {path}"));
}

#[tokio::test]
async fn test_malformed_text_passes_parser_error_through() {
    let mut fs = MemFs::new();
    fs.write("broken.json", "{\"swagger\": ");
    fs.write("broken.yaml", "swagger: [2.0\n");

    let err = parse(&fs, "broken.json").await.unwrap_err();
    assert!(matches!(err, SpecError::Format(FormatError::Json(_))));

    let err = parse(&fs, "broken.yaml").await.unwrap_err();
    assert!(matches!(err, SpecError::Format(FormatError::Yaml(_))));
}

#[tokio::test]
async fn test_json_suffix_decides_parser_not_content() {
    let mut fs = MemFs::new();
    fs.write("swagger.json", PETSTORE_YAML);
    let err = parse(&fs, "swagger.json").await.unwrap_err();
    assert!(matches!(err, SpecError::Format(FormatError::Json(_))));
}

#[tokio::test]
async fn test_invalid_document_then_valid_document() {
    let mut fs = MemFs::new();
    fs.write(
        "invalid.json",
        json!({"swagger": "2.0", "paths": {}}).to_string(),
    );
    fs.write("valid.yaml", PETSTORE_YAML);

    let err = parse(&fs, "invalid.json").await.unwrap_err();
    assert!(matches!(err, SpecError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "invalid.json does not conform to swagger specification"
    );

    let spec = parse(&fs, "valid.yaml").await.unwrap();
    assert_eq!(spec.loaded, parse_text(PETSTORE_YAML, SpecFormat::Yaml).unwrap());
}

#[tokio::test]
async fn test_external_ref_fails_validation() {
    let mut fs = MemFs::new();
    fs.write(
        "external.json",
        json!({
            "swagger": "2.0",
            "info": {"title": "t", "version": "1"},
            "paths": {"/ghosts": {"get": {"responses": {
                "200": {"description": "OK", "schema": {"$ref": "other.json#/definitions/Ghost"}}
            }}}}
        })
        .to_string(),
    );

    let err = parse(&fs, "external.json").await.unwrap_err();
    assert!(matches!(err, SpecError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "external.json does not conform to swagger specification"
    );
}

#[tokio::test]
async fn test_concurrent_parses_are_independent() {
    let mut fs = MemFs::new();
    fs.write("a.yaml", PETSTORE_YAML);
    fs.write(
        "b.json",
        json!({
            "swagger": "2.0",
            "info": {"title": "b", "version": "1"},
            "paths": {"/": {"delete": {"responses": {"default": {"description": "x"}}}}}
        })
        .to_string(),
    );
    fs.write("c.json", "[]");

    let (a, b, c) = tokio::join!(parse(&fs, "a.yaml"), parse(&fs, "b.json"), parse(&fs, "c.json"));

    assert_eq!(a.unwrap().parsed.route_count(), 4);
    let b = b.unwrap();
    assert_eq!(
        routes_of(&b, "Root"),
        vec![(HttpVerb::Delete, "/".to_string())]
    );
    assert!(b.parsed.refs.is_empty());
    assert!(matches!(c, Err(SpecError::Validation(_))));
}
