//! Integration tests: composed validators against realistic payloads.

use shapecheck::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// A: USER REGISTRATION PAYLOAD
// ============================================================================

fn registration() -> Structure {
    structure! {
        "name" => text(1, 100),
        "email" => email(),
        "password" => text(8, 128),
        "age" => integer(13, 120),
        "role" => one_of(["user", "moderator", "admin"]),
        "terms_accepted" => exactly(true),
        "bio" => maybe(text(0, 500)),
    }
}

#[test]
fn valid_registration() {
    let body = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "securepass123",
        "age": 28,
        "role": "user",
        "terms_accepted": true
    });
    assert!(registration().is_valid(&body));
}

#[test]
fn registration_with_optional_bio() {
    let body = json!({
        "name": "Bob",
        "email": "bob_builder@example.co.uk",
        "password": "hunter2hunter2",
        "age": 41,
        "role": "admin",
        "terms_accepted": true,
        "bio": "I build things."
    });
    assert!(registration().is_valid(&body));
}

#[test]
fn registration_extra_keys_are_ignored() {
    let body = json!({
        "name": "Carol",
        "email": "carol@example.com",
        "password": "correcthorse",
        "age": 33,
        "role": "moderator",
        "terms_accepted": true,
        "utm_source": "newsletter",
        "client_version": 4
    });
    assert!(registration().is_valid(&body));
}

#[test]
fn registration_rejections() {
    let valid = json!({
        "name": "Dee",
        "email": "dee@example.com",
        "password": "longenough1",
        "age": 20,
        "role": "user",
        "terms_accepted": true
    });
    assert!(registration().is_valid(&valid));

    let mutate = |key: &str, value: Value| {
        let mut body = valid.clone();
        body.as_object_mut().unwrap().insert(key.into(), value);
        body
    };

    // each single mutation flips the verdict
    assert!(!registration().is_valid(&mutate("name", json!(""))));
    assert!(!registration().is_valid(&mutate("email", json!("not-an-email"))));
    assert!(!registration().is_valid(&mutate("password", json!("short"))));
    assert!(!registration().is_valid(&mutate("age", json!(12))));
    assert!(!registration().is_valid(&mutate("age", json!(20.5))));
    assert!(!registration().is_valid(&mutate("role", json!("superuser"))));
    assert!(!registration().is_valid(&mutate("terms_accepted", json!(false))));
    assert!(!registration().is_valid(&mutate("bio", json!(42))));
}

#[test]
fn registration_missing_required_field() {
    let mut body = json!({
        "name": "Eve",
        "email": "eve@example.com",
        "password": "password123",
        "age": 25,
        "role": "user",
        "terms_accepted": true
    });
    body.as_object_mut().unwrap().remove("email");
    assert!(!registration().is_valid(&body));
}

// ============================================================================
// B: SERVER CONFIG DOCUMENT
// ============================================================================

fn server_config() -> Structure {
    structure! {
        "host" => text(1, 255),
        "port" => integer(1, 65535),
        "workers" => natural(),
        "log_level" => maybe(one_of(["debug", "info", "warn", "error"])),
        "tls" => maybe(structure! {
            "cert_path" => text(1, 4096),
            "key_path" => text(1, 4096),
        }),
        "allowed_origins" => list(text(1, 255), 0, 32),
    }
}

#[test]
fn full_config() {
    let config = json!({
        "host": "0.0.0.0",
        "port": 8080,
        "workers": 4,
        "log_level": "info",
        "tls": {
            "cert_path": "/etc/ssl/cert.pem",
            "key_path": "/etc/ssl/key.pem"
        },
        "allowed_origins": ["https://example.com"]
    });
    assert!(server_config().is_valid(&config));
}

#[test]
fn minimal_config() {
    let config = json!({
        "host": "localhost",
        "port": 3000,
        "workers": 1,
        "allowed_origins": []
    });
    assert!(server_config().is_valid(&config));
}

#[test]
fn config_rejections() {
    let base = json!({
        "host": "localhost",
        "port": 3000,
        "workers": 1,
        "allowed_origins": []
    });
    let mutate = |key: &str, value: Value| {
        let mut config = base.clone();
        config.as_object_mut().unwrap().insert(key.into(), value);
        config
    };

    assert!(!server_config().is_valid(&mutate("port", json!(0))));
    assert!(!server_config().is_valid(&mutate("port", json!(65536))));
    assert!(!server_config().is_valid(&mutate("workers", json!(0))));
    assert!(!server_config().is_valid(&mutate("log_level", json!("trace"))));
    assert!(!server_config().is_valid(&mutate("tls", json!({"cert_path": "/a"}))));
    assert!(!server_config().is_valid(&mutate("allowed_origins", json!("*"))));
}

// ============================================================================
// C: PATCH BODIES (PARTIAL)
// ============================================================================

fn profile_patch() -> Partial {
    partial! {
        "name" => text(1, 100),
        "bio" => text(0, 500),
        "age" => integer(13, 120),
    }
}

#[test]
fn patch_any_subset() {
    assert!(profile_patch().is_valid(&json!({})));
    assert!(profile_patch().is_valid(&json!({"name": "New Name"})));
    assert!(profile_patch().is_valid(&json!({"bio": "", "age": 30})));
}

#[test]
fn patch_rejects_unknown_and_invalid() {
    assert!(!profile_patch().is_valid(&json!({"nickname": "x"})));
    assert!(!profile_patch().is_valid(&json!({"name": ""})));
    assert!(!profile_patch().is_valid(&json!({"age": "30"})));
    assert!(!profile_patch().is_valid(&json!(["name"])));
}

// ============================================================================
// D: MIXED SHAPES
// ============================================================================

#[test]
fn event_envelope_with_tuple_coordinates() {
    let event = structure! {
        "kind" => one_of(["created", "moved", "deleted"]),
        "at" => date_string(),
        "position" => maybe(tuple![real(-90, 90), real(-180, 180)]),
        "payload" => anything(),
    };

    assert!(event.is_valid(&json!({
        "kind": "moved",
        "at": "2026-08-06T12:00:00Z",
        "position": [48.8584, 2.2945],
        "payload": {"opaque": true}
    })));

    // payload is optional by virtue of anything(); position by maybe()
    assert!(event.is_valid(&json!({
        "kind": "created",
        "at": "2026-08-06"
    })));

    assert!(!event.is_valid(&json!({
        "kind": "moved",
        "at": "2026-08-06",
        "position": [48.8584]
    })));
    assert!(!event.is_valid(&json!({
        "kind": "moved",
        "at": "yesterday-ish",
        "position": [48.8584, 2.2945]
    })));
}

#[test]
fn id_union_across_representations() {
    let id = union![natural(), natural_string()];
    let record = structure! { "id" => id };

    assert!(record.is_valid(&json!({"id": 41})));
    assert!(record.is_valid(&json!({"id": "41"})));
    assert!(!record.is_valid(&json!({"id": -41})));
    assert!(!record.is_valid(&json!({"id": "-41"})));
    assert!(!record.is_valid(&json!({"id": null})));
}

#[test]
fn amounts_as_decimal_strings() {
    let line_items = list(
        structure! {
            "sku" => natural_string(),
            "amount" => decimal_string(),
            "quantity" => natural(),
        },
        1,
        100,
    );

    assert!(line_items.is_valid(&json!([
        {"sku": "0042", "amount": "19.99", "quantity": 2},
        {"sku": "1337", "amount": "-5.00", "quantity": 1}
    ])));
    assert!(!line_items.is_valid(&json!([])));
    assert!(!line_items.is_valid(&json!([
        {"sku": "0042", "amount": "19.99.1", "quantity": 2}
    ])));
}

// ============================================================================
// E: GATING
// ============================================================================

#[test]
fn gate_passes_conformant_body_through() {
    let gate = validate(registration());
    let body = json!({
        "name": "Frank",
        "email": "frank@example.com",
        "password": "0123456789",
        "age": 52,
        "role": "user",
        "terms_accepted": true
    });
    let passed = gate.check(body.clone()).expect("body conforms");
    assert_eq!(passed, body);
}

#[test]
fn gate_rejects_with_the_generic_error() {
    let gate = validate(registration());
    let err = gate.check(json!({"name": "?"})).unwrap_err();
    assert_eq!(err.to_string(), "validation failed");
}

#[test]
fn gate_is_idempotent_on_success() {
    let gate = validate(server_config());
    let config = json!({
        "host": "localhost",
        "port": 3000,
        "workers": 2,
        "allowed_origins": ["https://a.example"]
    });
    let once = gate.check(config).expect("conforms");
    let twice = gate.check(once.clone()).expect("still conforms");
    assert_eq!(once, twice);
}
