use crate::*;

#[test]
fn parses_bare_array_json() {
    let t = Taxonomy::from_json_str(
        r#"[{"id":"a","name":"A","children":[{"id":"a1","name":"A1"}]},{"id":"b","name":"B"}]"#,
    )
    .unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.nodes[0].children[0].id, "a1");
}

#[test]
fn parses_rooted_object_and_ignores_root_fields() {
    let t = Taxonomy::from_json_str(
        r#"{"id":"root","name":"Places","children":[{"id":"a","name":"A"}]}"#,
    )
    .unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.nodes[0].name, "A");
}

#[test]
fn root_without_children_is_empty() {
    let t = Taxonomy::from_json_str(r#"{"name":"Places"}"#).unwrap();
    assert!(t.is_empty());
}

#[test]
fn parses_yaml() {
    let text = r#"
children:
  - id: outdoor
    name: Outdoor
    children:
      - id: hiking
        name: Hiking
  - id: indoor
    name: Indoor
"#;
    let t = Taxonomy::from_yaml_str(text).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.find("hiking").map(|n| n.name.as_str()), Some("Hiking"));
}

#[test]
fn parses_json5() {
    let text = r#"[
        // comments and trailing commas are fine
        { id: 'a', name: 'A', },
    ]"#;
    let t = Taxonomy::from_json5_str(text).unwrap();
    assert_eq!(t.nodes[0].id, "a");
}

#[test]
fn rejects_scalar_documents() {
    let err = Taxonomy::from_json_str("42").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedShape {
            format: DocumentFormat::Json
        }
    ));
}

#[test]
fn rejects_non_array_children() {
    let err = Taxonomy::from_yaml_str("children: nope\n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { .. }));
}

#[test]
fn nodes_without_ids_are_json_errors() {
    let err = Taxonomy::from_json_str(r#"[{"name":"A"}]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn format_from_path_and_str() {
    assert_eq!(DocumentFormat::from_path("a/b.yml"), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path("a/b.YAML"), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path("b.json5"), DocumentFormat::Json5);
    assert_eq!(DocumentFormat::from_path("b"), DocumentFormat::Json);
    assert_eq!("yaml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
    assert!("toml".parse::<DocumentFormat>().is_err());
}
