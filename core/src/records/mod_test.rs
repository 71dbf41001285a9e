use super::*;

#[test]
fn newest_first_should_order_by_date_descending() {
    let mut posts = vec![
        NewsPost {
            id: "old".into(),
            date: date::parse("2024-01-01"),
            ..Default::default()
        },
        NewsPost {
            id: "undated".into(),
            ..Default::default()
        },
        NewsPost {
            id: "new".into(),
            date: date::parse("2025-06-01T12:00:00Z"),
            ..Default::default()
        },
    ];

    newest_first(&mut posts);
    let order = posts.iter().map(|post| post.id.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["new", "old", "undated"], order);
}

#[test]
fn date_parse_should_accept_bare_dates() {
    let full = date::parse("2025-12-01T00:00:00Z").expect("timestamp should parse");
    let bare = date::parse("2025-12-01").expect("date should parse");
    assert_eq!(full, bare);
    assert_eq!(None, date::parse("next tuesday"));
}

#[test]
fn date_display_should_use_day_month_year() {
    assert_eq!("5 March 2024", date::display(date::parse("2024-03-05")));
    assert_eq!("", date::display(None));
}
