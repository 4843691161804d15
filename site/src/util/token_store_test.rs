#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_none_without_browser_storage() {
    assert_eq!(read(), None);
}

#[test]
fn write_then_read_is_still_none_outside_browser() {
    write("h.eyJyb2xlIjoiYWRtaW4ifQ.s");
    assert_eq!(read(), None);
    clear();
}

