//! Tests for the body enum.

use std::collections::BTreeMap;

use approx::assert_relative_eq;

use super::*;

#[test]
fn test_create_uses_default_parameters() {
    let sphere = Body::create(BodyKind::Sphere, None);
    assert_eq!(sphere.parameters(), vec![("radio", 0.0)]);

    let cube = Body::create(BodyKind::Cube, None);
    assert_eq!(cube.parameters(), vec![("lado", 0.0)]);
}

#[test]
fn test_create_applies_initial_values_and_ignores_unknown_keys() {
    let initial = BTreeMap::from([("radio".to_string(), 5.0), ("lado".to_string(), 9.0)]);
    let sphere = Body::create(BodyKind::Sphere, Some(&initial));
    assert_eq!(sphere.parameters(), vec![("radio", 5.0)]);
}

#[test]
fn test_sphere_formulas() {
    let mut sphere = Body::create(BodyKind::Sphere, None);
    sphere.set("radio", 3.0);
    assert_relative_eq!(sphere.volume(), 4.0 / 3.0 * std::f64::consts::PI * 27.0);
    assert_relative_eq!(sphere.surface(), 4.0 * std::f64::consts::PI * 9.0);
}

#[test]
fn test_cube_formulas() {
    let mut cube = Body::create(BodyKind::Cube, None);
    cube.set("lado", 2.0);
    assert_eq!(cube.volume(), 8.0);
    assert_eq!(cube.surface(), 24.0);
}

#[test]
fn test_get_unknown_key_is_not_found() {
    let cube = Body::create(BodyKind::Cube, None);
    assert_eq!(
        cube.get("radio"),
        Err(BodyError::NotFound {
            body: "cubo",
            key: "radio".to_string(),
        })
    );
}

#[test]
fn test_set_unknown_key_is_a_no_op() {
    let mut cube = Body::create(BodyKind::Cube, None);
    cube.set("lado", 4.0);
    let before = cube.clone();

    cube.set("nonexistent_key", 42.0);

    assert_eq!(cube, before);
    assert_eq!(cube.get("lado"), Ok(4.0));
}

#[test]
fn test_try_set_rejects_unknown_key_without_mutation() {
    let mut sphere = Body::create(BodyKind::Sphere, None);
    sphere.set("radio", 1.0);

    let err = sphere.try_set("lado", 7.0).unwrap_err();
    assert!(matches!(err, BodyError::NotFound { body: "esfera", .. }));
    assert_eq!(sphere.get("radio"), Ok(1.0));

    sphere.try_set("radio", 2.0).unwrap();
    assert_eq!(sphere.get("radio"), Ok(2.0));
}

#[test]
fn test_parameter_keys_never_change() {
    let mut sphere = Body::create(BodyKind::Sphere, None);
    let keys = sphere.parameter_keys();
    sphere.set("radio", 10.0);
    sphere.set("altura", 3.0);
    assert_eq!(sphere.parameter_keys(), keys);
}

#[test]
fn test_names_and_display_names() {
    let sphere = Body::create(BodyKind::Sphere, None);
    let cube = Body::create(BodyKind::Cube, None);
    assert_eq!(sphere.name(), "esfera");
    assert_eq!(sphere.display_name(), "Esfera");
    assert_eq!(cube.display_name(), "Cubo");
    assert_eq!(cube.kind(), BodyKind::Cube);
}

#[test]
fn test_image_path_uses_lowercased_name() {
    let cube = Body::create(BodyKind::Cube, None);
    assert_eq!(
        cube.image_path("assets/images"),
        Path::new("assets/images/cubo.png")
    );
}

#[test]
fn test_catalog_lists_every_kind_in_order() {
    let catalog = Body::catalog();
    let kinds: Vec<_> = catalog.iter().map(Body::kind).collect();
    assert_eq!(kinds, BodyKind::ALL.to_vec());
    assert!(catalog.iter().all(|body| body.volume() == 0.0));
}

#[test]
fn test_serializes_as_name_and_parameters() {
    let mut cube = Body::create(BodyKind::Cube, None);
    cube.set("lado", 3.0);
    let json = serde_json::to_value(&cube).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "cubo", "parameters": { "lado": 3.0 } })
    );
}

#[test]
fn test_deserializes_from_snapshot() {
    let body: Body =
        serde_json::from_str(r#"{"name": "sphere", "parameters": {"radio": 2.5}}"#).unwrap();
    assert_eq!(body.kind(), BodyKind::Sphere);
    assert_eq!(body.get("radio"), Ok(2.5));

    let defaulted: Body = serde_json::from_str(r#"{"name": "cubo"}"#).unwrap();
    assert_eq!(defaulted.get("lado"), Ok(0.0));
}

#[test]
fn test_deserialization_rejects_unknown_kind() {
    let result: Result<Body, _> = serde_json::from_str(r#"{"name": "torus", "parameters": {}}"#);
    assert!(result.is_err());
}

#[test]
fn test_capitalize_handles_empty_and_unicode() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("ñandú"), "Ñandú");
}
