use super::*;

fn topic(name: &str, kind: &str, message_count: u64, frequency: f64) -> Topic {
    Topic {
        id: None,
        name: name.to_string(),
        kind: kind.to_string(),
        message_count,
        frequency,
        video_path: None,
        video_url: None,
    }
}

fn names(topics: &[Topic]) -> Vec<&str> {
    topics.iter().map(|t| t.name.as_str()).collect()
}

fn sample() -> Vec<Topic> {
    vec![
        topic("/imu", "sensor_msgs/Imu", 500, 100.0),
        topic("/camera", "sensor_msgs/Image", 50, 12.5),
        topic("/gps", "sensor_msgs/NavSatFix", 5, 1.0),
        topic("/odom", "nav_msgs/Odometry", 50, 12.5),
    ]
}

#[test]
fn counts_and_frequencies_sort_numerically() {
    let topics = sample();
    assert_eq!(
        names(&sort_topics(&topics, TopicSortKey::MessageCount, false)),
        vec!["/gps", "/camera", "/odom", "/imu"]
    );
    assert_eq!(
        names(&sort_topics(&topics, TopicSortKey::Frequency, true)),
        vec!["/imu", "/camera", "/odom", "/gps"]
    );
}

#[test]
fn sort_is_stable_in_both_directions() {
    let topics = sample();
    let asc = sort_topics(&topics, TopicSortKey::MessageCount, false);
    let desc = sort_topics(&topics, TopicSortKey::MessageCount, true);

    let pos = |v: &[Topic], n: &str| v.iter().position(|t| t.name == n).unwrap();
    assert!(pos(&asc, "/camera") < pos(&asc, "/odom"));
    assert!(pos(&desc, "/camera") < pos(&desc, "/odom"));
}

#[test]
fn text_columns_sort_lexicographically() {
    assert_eq!(
        names(&sort_topics(&sample(), TopicSortKey::Kind, false)),
        vec!["/odom", "/camera", "/imu", "/gps"]
    );
}

#[test]
fn numeric_columns_match_only_exactly() {
    let topics = sample();
    assert_eq!(names(&filter_topics(&topics, "5")), vec!["/gps"]);
    assert_eq!(names(&filter_topics(&topics, "50")), vec!["/camera", "/odom"]);
    assert_eq!(names(&filter_topics(&topics, "12.5")), vec!["/camera", "/odom"]);
    assert!(filter_topics(&topics, "12").is_empty());
}

#[test]
fn text_columns_match_substrings_case_insensitively() {
    let topics = sample();
    assert_eq!(names(&filter_topics(&topics, " IMAGE ")), vec!["/camera"]);
    assert_eq!(names(&filter_topics(&topics, "sensor")), vec!["/imu", "/camera", "/gps"]);
    assert_eq!(filter_topics(&topics, ""), topics);
}

#[test]
fn table_filters_after_sorting() {
    let mut table = TopicTable::new(sample());
    table.set_sorting(TopicSortKey::MessageCount);
    table.set_search("sensor");
    assert_eq!(names(&table.visible()), vec!["/gps", "/camera", "/imu"]);

    table.set_sorting(TopicSortKey::MessageCount);
    assert!(table.reversed());
    assert_eq!(names(&table.visible()), vec!["/imu", "/camera", "/gps"]);

    table.set_sorting(TopicSortKey::Name);
    assert!(!table.reversed());
    assert_eq!(names(&table.visible()), vec!["/camera", "/gps", "/imu"]);
}

#[test]
fn sort_keys_use_wire_names() {
    assert_eq!(TopicSortKey::parse("type"), Some(TopicSortKey::Kind));
    assert_eq!(TopicSortKey::parse("message_count").map(TopicSortKey::as_str), Some("message_count"));
    assert_eq!(TopicSortKey::parse("kind"), None);
}
