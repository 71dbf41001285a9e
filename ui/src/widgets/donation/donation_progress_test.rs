use super::*;

#[test]
fn group_thousands_should_insert_separators() {
    assert_eq!("0", group_thousands(0));
    assert_eq!("950", group_thousands(950));
    assert_eq!("1,000", group_thousands(1_000));
    assert_eq!("5,000,000", group_thousands(5_000_000));
    assert_eq!("12,345,678", group_thousands(12_345_678));
}
