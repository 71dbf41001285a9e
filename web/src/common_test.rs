use super::*;

#[test]
fn parse_amount_should_accept_formatted_amounts() {
    assert_eq!(Some(5_000), parse_amount("5000"));
    assert_eq!(Some(25_000), parse_amount(" ₦25,000 "));
    assert_eq!(None, parse_amount("0"));
    assert_eq!(None, parse_amount("-10"));
    assert_eq!(None, parse_amount("ten"));
}
