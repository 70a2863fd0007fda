// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::json;

use crate::{ApiError, EditEntityRequest, EditPayloadError, parse_edit_body, parse_edit_payload};

#[test]
fn test_accepts_name_and_description() {
    let payload = json!({ "name": "Road works", "description": "Phase 2" });

    assert_eq!(
        parse_edit_payload(&payload),
        Ok(EditEntityRequest {
            name: String::from("Road works"),
            description: String::from("Phase 2"),
        })
    );
}

#[test]
fn test_rejects_header_fields() {
    for field in ["status", "serviceType", "organizationId", "creatorUsername", "version"] {
        let mut payload = json!({ "name": "Road works", "description": "Phase 2" });
        payload[field] = json!("changed");

        assert_eq!(
            parse_edit_payload(&payload),
            Err(EditPayloadError::UnexpectedField {
                field: field.to_string(),
            }),
            "field {field} should be rejected"
        );
    }
}

#[test]
fn test_requires_both_fields() {
    assert_eq!(
        parse_edit_payload(&json!({ "name": "Road works" })),
        Err(EditPayloadError::MissingField {
            field: "description"
        })
    );
    assert_eq!(
        parse_edit_payload(&json!({ "description": "Phase 2" })),
        Err(EditPayloadError::MissingField { field: "name" })
    );
}

#[test]
fn test_rejects_non_string_values() {
    assert_eq!(
        parse_edit_payload(&json!({ "name": 7, "description": "Phase 2" })),
        Err(EditPayloadError::InvalidFieldType { field: "name" })
    );
}

#[test]
fn test_rejects_non_object_bodies() {
    assert_eq!(
        parse_edit_payload(&json!(["name", "description"])),
        Err(EditPayloadError::NotAnObject)
    );
    assert!(matches!(
        parse_edit_body(b"{not json"),
        Err(EditPayloadError::InvalidJson(_))
    ));
}

#[test]
fn test_payload_errors_become_invalid_input() {
    let err = parse_edit_body(br#"{"name":"a","description":"b","status":"CANCELED"}"#)
        .unwrap_err();

    let api_error = ApiError::from(err);

    assert!(matches!(
        api_error,
        ApiError::InvalidInput { ref field, .. } if field == "status"
    ));
}
