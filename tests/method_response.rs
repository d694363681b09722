//! Method Response Tests
//!
//! Construction and read behavior of direct method responses:
//! - JSON-or-empty body validation
//! - Status-only responses
//! - Sharing a constructed response across threads

use device_method::{MethodResponse, ValidationError};
use std::sync::Arc;
use std::thread;

// =============================================================================
// Body-carrying construction
// =============================================================================

mod body_tests {
    use super::*;

    #[test]
    fn test_object_body_is_accepted() {
        let response = MethodResponse::with_body("{\"a\":1}", 200).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.result_as_text(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_empty_body_reads_as_no_text() {
        let response = MethodResponse::with_body("", 200).unwrap();

        assert_eq!(response.result().map(<[u8]>::len), Some(0));
        assert_eq!(response.result_as_text(), None);
    }

    #[test]
    fn test_not_json_fails() {
        let result = MethodResponse::with_body("not json", 500);
        assert!(matches!(result, Err(ValidationError::InvalidJson { .. })));
    }

    #[test]
    fn test_bare_string_is_a_valid_token() {
        let response = MethodResponse::with_body("\"just a string\"", 200).unwrap();
        assert_eq!(response.result_as_text(), Some("\"just a string\""));
    }

    #[test]
    fn test_bare_number_is_a_valid_token() {
        let response = MethodResponse::with_body("42", 200).unwrap();
        assert_eq!(response.result(), Some(&b"42"[..]));
    }

    #[test]
    fn test_valid_bodies_round_trip_byte_for_byte() {
        let bodies: &[&[u8]] = &[
            b"{}",
            b"[]",
            b"null",
            b"true",
            b" [1, {\"x\": null}] ",
            "{\"name\":\"caf\u{e9}\"}".as_bytes(),
            b"\"\\u00e9\"",
        ];

        for (i, body) in bodies.iter().enumerate() {
            let status = i as i32 - 3;
            let response = MethodResponse::new(Some(body.to_vec()), status).unwrap();

            assert_eq!(response.status(), status);
            assert_eq!(response.result(), Some(*body));
            assert_eq!(
                response.result_as_text(),
                Some(std::str::from_utf8(body).unwrap())
            );
        }
    }

    #[test]
    fn test_invalid_bodies_are_rejected() {
        let bodies: &[&[u8]] = &[
            b"{",
            b"}",
            b"nul",
            b"{'a': 1}",
            b"[1 2]",
            b"1 2",
            b"\n",
            &[0x80],
            &[b'"', 0xed, 0xa0, 0x80, b'"'],
        ];

        for body in bodies {
            assert!(
                MethodResponse::new(Some(body.to_vec()), 200).is_err(),
                "{:?} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_error_exposes_parse_position() {
        let err = MethodResponse::with_body("{\"a\":1,\n\"b\":}", 500).unwrap_err();

        match err {
            ValidationError::InvalidJson { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 5);
            }
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_error_exposes_utf8_offset() {
        let err = MethodResponse::with_body(vec![b'[', b'1', b',', 0xff, b']'], 500).unwrap_err();

        assert!(matches!(err, ValidationError::InvalidUtf8 { valid_up_to: 3, .. }));
        assert_eq!(err.position(), "byte 3");
    }

    #[test]
    fn test_from_json_builds_body() {
        #[derive(serde::Serialize)]
        struct Reading {
            sensor: &'static str,
            value: f64,
        }

        let reading = Reading {
            sensor: "t1",
            value: 20.5,
        };
        let response = MethodResponse::from_json(&reading, 200).unwrap();
        assert_eq!(response.result_as_text(), Some(r#"{"sensor":"t1","value":20.5}"#));
    }
}

// =============================================================================
// Status-only construction
// =============================================================================

mod status_only_tests {
    use super::*;

    #[test]
    fn test_status_only_has_no_body() {
        let response = MethodResponse::status_only(404);

        assert_eq!(response.status(), 404);
        assert!(response.result().is_none());
        assert!(response.result_as_text().is_none());
    }

    #[test]
    fn test_status_only_equals_absent_body() {
        let via_new = MethodResponse::new(None::<&str>, 500).unwrap();
        assert_eq!(via_new, MethodResponse::status_only(500));
    }

    #[test]
    fn test_status_only_differs_from_empty_body() {
        let empty = MethodResponse::with_body("", 200).unwrap();
        assert_ne!(empty, MethodResponse::status_only(200));
    }
}

// =============================================================================
// Sharing
// =============================================================================

mod sharing_tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_response_is_send_and_sync() {
        assert_send_sync::<MethodResponse>();
    }

    #[test]
    fn test_concurrent_readers_see_same_values() {
        let response = Arc::new(MethodResponse::with_body("{\"ok\":true}", 200).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let response = Arc::clone(&response);
                thread::spawn(move || {
                    (
                        response.status(),
                        response.result_as_text().map(str::to_string),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (status, text) = handle.join().unwrap();
            assert_eq!(status, 200);
            assert_eq!(text.as_deref(), Some("{\"ok\":true}"));
        }
    }
}
