use super::*;

fn event(event_type: EventType, url: &str) -> Event {
    Event {
        task_id: "t1".to_string(),
        event_type,
        url: url.to_string(),
    }
}

#[test]
fn test_web_urls_accepted() {
    let v = UrlValidator::new("obsidian").unwrap();
    assert!(v.is_valid("https://example.com"));
    assert!(v.is_valid("http://www.example.org/path?q=1&x=y"));
    assert!(v.is_valid("example.com/docs"));
}

#[test]
fn test_web_urls_with_sub_delims_accepted() {
    let v = UrlValidator::new("obsidian").unwrap();
    assert!(v.is_valid("https://en.wikipedia.org/wiki/Rust_(programming_language)"));
    assert!(v.is_valid("https://example.com/a;b=1"));
    assert!(v.is_valid("https://example.com/search?q=it's&sort=*,!"));
    assert!(v.is_valid("https://example.com/p?ids[]=1&ids[]=2"));
    assert!(!v.is_valid("https://example.com/a b"));
    assert!(!v.is_valid("https://example.com/<script>"));
}

#[test]
fn test_deep_links_accepted() {
    let v = UrlValidator::new("obsidian").unwrap();
    assert!(v.is_valid("obsidian://open?vault=Work&file=Plan"));
    assert!(!v.is_valid("obsidian://delete?vault=Work"));
}

#[test]
fn test_custom_scheme() {
    let v = UrlValidator::new("logseq").unwrap();
    assert!(v.is_valid("logseq://open?page=Roadmap"));
    assert!(!v.is_valid("obsidian://open?vault=Work"));
}

#[test]
fn test_invalid_urls_rejected() {
    let v = UrlValidator::new("obsidian").unwrap();
    assert!(!v.is_valid("javascript:alert(1)"));
    assert!(!v.is_valid("not a url"));
    assert!(!v.is_valid("ftp://example.com"));
    assert!(!v.is_valid(""));
}

#[test]
fn test_resolve_action() {
    let v = UrlValidator::new("obsidian").unwrap();
    assert_eq!(
        resolve_action(&event(EventType::GoTo, "https://example.com"), &v),
        Ok(Action::Navigate("https://example.com".to_string()))
    );
    assert_eq!(
        resolve_action(&event(EventType::Popup, "https://example.com"), &v),
        Ok(Action::Popup("https://example.com".to_string()))
    );
    assert_eq!(
        resolve_action(&event(EventType::GoTo, "nope"), &v),
        Err(LayoutError::InvalidUrl("nope".to_string()))
    );
}
