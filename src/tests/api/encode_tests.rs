use super::*;

#[test]
fn names_are_encoded_twice() {
    assert_eq!(encode_name("field test"), "field%2520test");
    assert_eq!(encode_name("a/b"), "a%252Fb");
    assert_eq!(encode_name("plain-name_1.0"), "plain-name_1.0");
}

#[test]
fn component_encoding_keeps_the_uri_component_unreserved_set() {
    assert_eq!(encode_component("it's (ok)!*~"), "it's%20(ok)!*~");
    assert_eq!(encode_component("grün"), "gr%C3%BCn");
}

#[test]
fn paths_keep_separators() {
    assert_eq!(encode_path("runs/day 1/a.mcap"), "runs/day%201/a.mcap");
}
