//! Payload boundary tests
//!
//! Checks that inbound JSON goes through the same constraints as the
//! constructors and that outbound payloads omit absent fields.

use ocpp_model::payload::{decode, encode};
use ocpp_model::{
    decode_dynamic, Action, Call, CustomData, DataTransferRequest, DataTransferResponse,
    DataTransferStatus, Direction, PayloadError, Request, StatusInfo, UnpublishFirmwareRequest,
    UnpublishFirmwareResponse, UnpublishFirmwareStatus, Validate, Violation,
};
use serde_json::json;

#[test]
fn test_checksum_scenario() {
    let req = UnpublishFirmwareRequest::new("d41d8cd98f00b204e9800998ecf8427e").unwrap();
    assert!(req.validate());

    let err = UnpublishFirmwareRequest::new("d41d8cd98f00b204e9800998ecf8427ef").unwrap_err();
    assert_eq!(err.field, "checksum");
    assert_eq!(err.violation, Violation::TooLong { max: 32, len: 33 });

    // null only arrives through a payload; it is a missing required field
    let err = decode::<UnpublishFirmwareRequest>(json!({"checksum": null})).unwrap_err();
    assert!(err.to_string().contains("checksum is invalid: required value is missing"));
}

#[test]
fn test_status_scenario() {
    let resp = DataTransferResponse::new(DataTransferStatus::Accepted);
    assert!(resp.validate());

    let bad = StatusInfo {
        custom_data: None,
        reason_code: "ThisReasonCodeIsFarTooLong".to_string(),
        additional_info: None,
    };
    let err = resp.clone().with_status_info(Some(bad)).unwrap_err();
    assert_eq!(err.field, "statusInfo");
    assert_eq!(err.violation, Violation::InvalidComposite);
}

#[test]
fn test_absent_optionals_are_omitted() {
    let req = DataTransferRequest::new("acme").unwrap();
    assert_eq!(encode(&req).unwrap(), json!({"vendorId": "acme"}));

    let req = req
        .with_message_id(Some("Tariff".to_string()))
        .unwrap()
        .with_custom_data(Some(CustomData::new("acme").unwrap().with_property("rev", 2i64)))
        .unwrap();
    assert_eq!(
        encode(&req).unwrap(),
        json!({
            "customData": {"vendorId": "acme", "rev": 2},
            "messageId": "Tariff",
            "vendorId": "acme"
        })
    );
}

#[test]
fn test_inbound_invalid_custom_data_is_rejected() {
    let payload = json!({
        "customData": {"vendorId": "v".repeat(256)},
        "status": "Unpublished"
    });
    let err = decode::<UnpublishFirmwareResponse>(payload).unwrap_err();
    assert!(err.to_string().contains("customData"));
}

#[test]
fn test_inbound_unknown_nested_fields_are_rejected() {
    let payload = json!({
        "status": "Accepted",
        "statusInfo": {"reasonCode": "x", "bogus": 1}
    });
    let err = decode::<DataTransferResponse>(payload).unwrap_err();
    assert!(matches!(err, PayloadError::Json(_)));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn test_inbound_wrong_types_are_rejected() {
    assert!(decode::<UnpublishFirmwareRequest>(json!({"checksum": 42})).is_err());
    assert!(decode::<UnpublishFirmwareRequest>(json!(["checksum"])).is_err());
    assert!(decode::<UnpublishFirmwareRequest>(json!({"checksum": "x", "extra": 1})).is_err());
}

#[test]
fn test_decode_then_encode_preserves_payload() {
    let payload = json!({
        "status": "Rejected",
        "statusInfo": {"reasonCode": "UnknownMessage", "additionalInfo": "no handler"},
        "data": {"retry": false, "codes": [1, 2, 3]}
    });
    let resp: DataTransferResponse = decode(payload.clone()).unwrap();
    assert_eq!(resp.status(), DataTransferStatus::Rejected);
    assert_eq!(encode(&resp).unwrap(), payload);
}

#[test]
fn test_call_exposes_dispatch_metadata() {
    let req = UnpublishFirmwareRequest::new("d41d8cd98f00b204e9800998ecf8427e").unwrap();
    let call = Call::new(req.clone()).unwrap();

    assert_eq!(call.action(), Action::UnpublishFirmware);
    assert_eq!(call.transaction_related(), req.transaction_related());
    assert_eq!(call.request(), &req);

    let result = call
        .respond(UnpublishFirmwareResponse::new(UnpublishFirmwareStatus::NoFirmware))
        .unwrap();
    assert_eq!(result.message_id, call.message_id);
}

#[test]
fn test_dynamic_decode_of_unknown_enum() {
    let err = decode_dynamic(
        Action::DataTransfer,
        Direction::Response,
        json!({"status": "Perhaps"}),
    )
    .unwrap_err();
    assert!(matches!(err, PayloadError::Json(_)));
}
