use jsonlens::{format, Formatter};
use serde::Serialize;

#[test]
fn document_shape_with_default_options() {
    let html = format(r#"{"x":1}"#, None);
    let head = "<!DOCTYPE html>\n<html><head><title></title>\n\
                <link rel=\"stylesheet\" type=\"text/css\" href=\"json.css\">\n\
                <script type=\"text/javascript\" src=\"live.js\"></script>\n\
                </head><body>\n";
    assert!(html.starts_with(head), "unexpected head in {:?}", html);
    assert!(html.ends_with("<br\n/></body></html>"));
}

#[test]
fn source_url_becomes_the_title() {
    let html = format(r#"{"x":1}"#, Some("https://api.example.com/items?a=1&b=2"));
    assert!(html.contains("<title>https://api.example.com/items?a=1&amp;b=2</title>"));
}

#[test]
fn formatting_is_pure() {
    let payload = r#"myCb({"x":[1,{"y":null}]});"#;
    assert_eq!(format(payload, Some("u")), format(payload, Some("u")));
}

#[test]
fn jsonp_payload_gets_callback_markup() {
    let html = format(r#"myCb({"x":1});"#, None);
    let expected = "<span class=\"callback\">myCb(</span>\
                    <span id=\"json\"><span class=\"unfolded obj\"><span class=\"content\">\
                    <br\n/>&nbsp; { <span class=\"prop\">\"x\"</span>: <span class=\"num\">1</span>\
                    <br\n/>&nbsp; }</span></span></span>\
                    <span class=\"callback\">);</span>";
    assert!(html.contains(expected), "missing callback fragment in {:?}", html);
}

#[test]
fn callback_without_semicolon_keeps_empty_trailer() {
    let html = format(r#"foo.bar[0]({"x":1})"#, None);
    assert!(html.contains(r#"<span class="callback">foo.bar[0](</span>"#));
    assert!(html.contains(r#"<span class="callback">)</span>"#));
}

#[test]
fn plain_json_gets_no_callback_markup() {
    let html = format(r#"{"x":1}"#, None);
    assert!(!html.contains(r#"class="callback""#));
}

#[test]
fn malformed_payload_yields_error_document() {
    let html = format("{bad json", None);
    assert!(html.contains(r#"<div id="error">Error parsing JSON: "#));
    assert!(html.contains("<h1>Document contents:</h1>"));
    assert!(html.contains("{bad json"));
    assert!(html.contains("<title>Error</title>"));
}

#[test]
fn error_title_includes_the_source_url() {
    let html = format("{bad json", Some("http://api.example.com/x"));
    assert!(html.contains("<title>http://api.example.com/x - Error</title>"));
}

#[test]
fn error_document_embeds_the_original_payload_not_the_extracted_span() {
    let html = format("cb({bad});", None);
    assert!(html.contains(r#"<div id="error">"#));
    assert!(html.contains("cb({bad});"));
}

#[test]
fn error_document_escapes_the_payload() {
    let html = format("<script>alert(1)</script>", None);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)"));
}

#[test]
fn detection_can_be_disabled() {
    let mut formatter = Formatter::new();
    formatter.options.detect_jsonp = false;
    let html = formatter.format(r#"myCb({"x":1});"#, None);
    assert!(html.contains(r#"<div id="error">"#));
    assert!(!html.contains(r#"class="callback""#));
}

#[test]
fn resource_references_are_configurable() {
    let mut formatter = Formatter::new();
    formatter.options.stylesheet_href = "assets/style.css".to_string();
    formatter.options.script_src = "assets/reload.js".to_string();
    let html = formatter.format("{}", None);
    assert!(html.contains(r#"href="assets/style.css""#));
    assert!(html.contains(r#"src="assets/reload.js""#));
}

#[test]
fn depth_limit_is_recovered_as_an_error_document() {
    let mut formatter = Formatter::new();
    formatter.options.max_render_depth = 1;
    let html = formatter.format(r#"{"a":1}"#, None);
    assert!(html.contains(r#"<div id="error">"#));
    assert!(html.contains("Depth limit exceeded"));
}

#[derive(Serialize)]
struct Player {
    name: String,
    scores: Vec<i32>,
}

#[test]
fn serializable_values_render_directly() {
    let player = Player { name: "Alice".into(), scores: vec![95, 87] };
    let formatter = Formatter::new();
    let html = formatter.serialize(&player, None).unwrap();
    let name = html.find(r#"<span class="prop">"name"</span>"#).expect("name rendered");
    let scores = html.find(r#"<span class="prop">"scores"</span>"#).expect("scores rendered");
    assert!(name < scores);
    assert!(html.contains(r#"<span class="string">"Alice"</span>"#));
}

#[test]
fn unrepresentable_values_fail_serialize() {
    use std::collections::BTreeMap;
    let mut map: BTreeMap<(u8, u8), u8> = BTreeMap::new();
    map.insert((1, 2), 3);
    let formatter = Formatter::new();
    assert!(formatter.serialize(&map, None).is_err());
}
