use chrono::Utc;
use mail_link_extract::{
    BodyPart, ContentType, LinkRecord, MessageData, RedirectOutcome, Sender,
};

#[test]
fn test_link_record_engagement() {
    let mut record = LinkRecord::new("http://a.test");
    assert_eq!(record.engagement(), 0);

    record.texts.push("click".to_string());
    record.texts.push("here".to_string());
    record.images.push("http://a.test/i.png".to_string());

    assert_eq!(record.engagement(), 3);
}

#[test]
fn test_link_record_empty_fields_omitted_in_json() {
    let record = LinkRecord::new("http://a.test");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json, serde_json::json!({ "url": "http://a.test" }));
}

#[test]
fn test_link_record_populated_fields_serialized() {
    let record = LinkRecord {
        url: "http://a.test".to_string(),
        texts: vec!["click".to_string()],
        images: Vec::new(),
        redirects: vec!["http://b.test".to_string()],
    };
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "url": "http://a.test",
            "texts": ["click"],
            "redirects": ["http://b.test"]
        })
    );
}

#[test]
fn test_link_record_deserializes_missing_fields_as_empty() {
    let record: LinkRecord = serde_json::from_str(r#"{"url":"http://a.test"}"#).unwrap();

    assert_eq!(record.url, "http://a.test");
    assert!(record.texts.is_empty());
    assert!(record.images.is_empty());
    assert!(record.redirects.is_empty());
}

#[test]
fn test_redirect_outcome_unresolved_fallback() {
    let outcome = RedirectOutcome::unresolved("http://down.test");

    assert_eq!(outcome.source, "http://down.test");
    assert_eq!(outcome.effective, "http://down.test");
    assert!(outcome.probable.is_empty());
}

#[test]
fn test_redirect_outcome_empty_probable_omitted_in_json() {
    let outcome = RedirectOutcome::unresolved("http://a.test");
    let json = serde_json::to_value(&outcome).unwrap();

    assert!(json.get("probable").is_none());
}

#[test]
fn test_content_type_tagging() {
    assert!(ContentType::Html.is_html());
    assert!(!ContentType::Plain.is_html());
    assert!(!ContentType::Other("CALENDAR".to_string()).is_html());
}

#[test]
fn test_body_part_constructors() {
    assert!(BodyPart::html("<p></p>").content_type.is_html());
    assert_eq!(BodyPart::plain("hi").content_type, ContentType::Plain);
}

#[test]
fn test_sender_display() {
    let named = Sender {
        name: Some("Jane Doe".to_string()),
        address: "jane@example.com".to_string(),
    };
    let bare = Sender {
        name: None,
        address: "jane@example.com".to_string(),
    };

    assert_eq!(named.to_string(), "Jane Doe <jane@example.com>");
    assert_eq!(bare.to_string(), "jane@example.com");
}

#[test]
fn test_message_data_round_trip() {
    let msg = MessageData {
        uid: "7".to_string(),
        charset: "UTF-8".to_string(),
        from: Sender {
            name: None,
            address: "news@example.com".to_string(),
        },
        subject: "Hello".to_string(),
        date: Utc::now(),
        bodies: vec![BodyPart::html("<p>hi</p>")],
    };

    let json = serde_json::to_string(&msg).unwrap();
    let back: MessageData = serde_json::from_str(&json).unwrap();

    assert_eq!(back.uid, "7");
    assert_eq!(back.from.address, "news@example.com");
    assert!(back.has_html_body());
}
