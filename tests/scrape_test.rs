use chrono::Utc;
use mail_link_extract::{BodyPart, ContentType, MessageData, Scraper, Sender};

fn message(bodies: Vec<BodyPart>) -> MessageData {
    MessageData {
        uid: "42".to_string(),
        charset: "UTF-8".to_string(),
        from: Sender {
            name: Some("Jane Doe".to_string()),
            address: "jane@example.com".to_string(),
        },
        subject: "Weekly deals".to_string(),
        date: Utc::now(),
        bodies,
    }
}

#[test]
fn test_no_html_part_yields_empty() {
    let scraper = Scraper::new().unwrap();
    let msg = message(vec![BodyPart::plain("visit http://a.test")]);

    assert!(scraper.get_links(&msg, false).is_empty());
    assert!(!msg.has_html_body());
}

#[test]
fn test_html_part_is_extracted() {
    let scraper = Scraper::new().unwrap();
    let msg = message(vec![
        BodyPart::plain("plain fallback"),
        BodyPart::html(r#"<a href="http://a.test">deal</a>"#),
    ]);

    let links = scraper.get_links(&msg, false);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "http://a.test");
    assert!(msg.has_html_body());
}

#[test]
fn test_last_html_part_wins() {
    let scraper = Scraper::new().unwrap();
    let msg = message(vec![
        BodyPart::html(r#"<a href="http://first.test">first</a>"#),
        BodyPart::html(r#"<a href="http://second.test">second</a>"#),
    ]);

    let links = scraper.get_links(&msg, false);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "http://second.test");
}

#[test]
fn test_other_content_types_skipped() {
    let scraper = Scraper::new().unwrap();
    let msg = message(vec![
        BodyPart {
            content_type: ContentType::Other("CALENDAR".to_string()),
            content: r#"<a href="http://ignored.test">x</a>"#.to_string(),
        },
        BodyPart::html(r#"<a href="http://kept.test">y</a>"#),
    ]);

    let links = scraper.get_links(&msg, false);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "http://kept.test");
}
