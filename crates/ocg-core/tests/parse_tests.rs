use ocg_core::parse;
use ocg_core::parse::request_body::RequestBodyOrRef;
use ocg_core::parse::response::ResponseOrRef;

const TRADING: &str = include_str!("fixtures/trading.json");
const DEALS: &str = include_str!("fixtures/deals.json");

#[test]
fn parse_trading_json() {
    let document = parse::from_json(TRADING).expect("should parse trading.json");
    assert_eq!(document.openapi, "3.0.1");
    assert_eq!(document.info.title, "Deck Trading API");
    assert_eq!(document.paths.len(), 5);
    assert_eq!(document.servers.len(), 3);

    let lists = document.paths.get("/lists").expect("should have /lists");
    let get = lists.get.as_ref().expect("should have GET");
    assert_eq!(get.summary.as_deref(), Some("Lists: get all lists"));

    let ok = get.responses.get("200").expect("should have 200 response");
    match ok {
        ResponseOrRef::Response(response) => {
            let media = response
                .content
                .get("application/json")
                .expect("should have JSON content");
            assert!(media.example.is_some());
            assert!(media.schema.is_none());
        }
        _ => panic!("expected inline response"),
    }
}

#[test]
fn parse_encoded_example_as_plain_string() {
    let document = parse::from_json(TRADING).unwrap();
    let post = document.paths["/lists"].post.as_ref().unwrap();
    let Some(RequestBodyOrRef::RequestBody(body)) = &post.request_body else {
        panic!("expected inline request body");
    };
    let media = &body.content["application/json"];
    let schema = match media.schema.as_ref().unwrap() {
        ocg_core::parse::schema::SchemaOrRef::Schema(schema) => schema,
        _ => panic!("expected inline schema"),
    };
    // the example is a JSON-encoded string; decoding happens at extraction
    assert!(schema.example.as_ref().unwrap().is_string());
    assert!(!schema.has_declared_structure());
}

#[test]
fn parse_declared_response_schema() {
    let document = parse::from_json(DEALS).unwrap();
    let get = document.paths["/deal_item"].get.as_ref().unwrap();
    assert_eq!(get.operation_id.as_deref(), Some("getDealItems"));

    let ResponseOrRef::Response(ok) = &get.responses["200"] else {
        panic!("expected inline response");
    };
    let media = &ok.content["application/json"];
    let schema = match media.schema.as_ref().unwrap() {
        ocg_core::parse::schema::SchemaOrRef::Schema(schema) => schema,
        _ => panic!("expected inline schema"),
    };
    assert!(schema.has_declared_structure());
    assert_eq!(schema.properties.len(), 2);
    assert_eq!(schema.required, ["total"]);
}

#[test]
fn parse_empty_operation_object() {
    let document = parse::from_json(TRADING).unwrap();
    let ping = document.paths["/ping"].get.as_ref().unwrap();
    assert!(ping.is_empty());
}

#[test]
fn parse_server_variables() {
    let document = parse::from_json(TRADING).unwrap();
    let production = &document.servers[0];
    assert_eq!(production.description.as_deref(), Some("production"));
    assert_eq!(
        production.substituted_url(),
        "https://api.trading.example/v3"
    );
}

#[test]
fn parse_rejects_unsupported_versions() {
    let raw = r#"{"openapi": "2.0.0", "info": {"title": "T", "version": "1"}, "paths": {}}"#;
    assert!(parse::from_json(raw).is_err());
}

#[test]
fn parse_yaml_documents() {
    let yaml = r#"
openapi: "3.1.0"
info:
  title: Minimal
  version: "1.0"
paths:
  /health:
    get:
      summary: "Health: report service status"
      responses:
        "200":
          description: ok
"#;
    let document = parse::from_yaml(yaml).expect("should parse YAML");
    assert_eq!(document.openapi, "3.1.0");
    assert_eq!(document.paths.len(), 1);
}
