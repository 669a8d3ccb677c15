use super::*;

#[test]
fn parse_root_is_home() {
    assert_eq!(AppRoute::parse("/"), Ok(AppRoute::Home));
    assert_eq!(AppRoute::parse(""), Ok(AppRoute::Home));
}

#[test]
fn parse_photos_ignores_trailing_slash_and_query() {
    assert_eq!(AppRoute::parse("/photos"), Ok(AppRoute::Photos));
    assert_eq!(AppRoute::parse("/photos/"), Ok(AppRoute::Photos));
    assert_eq!(AppRoute::parse("/photos?layout=full"), Ok(AppRoute::Photos));
}

#[test]
fn parse_photo_detail_reads_numeric_id() {
    assert_eq!(AppRoute::parse("/photos/3"), Ok(AppRoute::PhotoDetail(3)));
}

#[test]
fn parse_photo_detail_rejects_non_numeric_id() {
    assert_eq!(
        AppRoute::parse("/photos/abc"),
        Err(RouteError::InvalidPhotoId("abc".to_owned()))
    );
}

#[test]
fn parse_unknown_path_is_error() {
    assert_eq!(
        AppRoute::parse("/albums/1"),
        Err(RouteError::UnknownPath("/albums/1".to_owned()))
    );
    assert!(AppRoute::parse("/photos/1/edit").is_err());
}

#[test]
fn href_round_trips_through_parse() {
    for route in [AppRoute::Home, AppRoute::Photos, AppRoute::PhotoDetail(42)] {
        assert_eq!(AppRoute::parse(&route.href()), Ok(route));
    }
}

#[test]
fn parse_photo_id_rejects_negative_fractional_and_blank() {
    assert!(parse_photo_id("-1").is_err());
    assert!(parse_photo_id("").is_err());
    assert!(parse_photo_id("   ").is_err());
    assert!(parse_photo_id("1.5").is_err());
    assert!(parse_photo_id("NaN").is_err());
    assert!(parse_photo_id("inf").is_err());
    assert!(parse_photo_id("4294967296").is_err());
    assert_eq!(parse_photo_id("7"), Ok(7));
}

#[test]
fn parse_photo_id_accepts_numeric_spellings() {
    assert_eq!(parse_photo_id(" 1"), Ok(1));
    assert_eq!(parse_photo_id("1 "), Ok(1));
    assert_eq!(parse_photo_id("1.0"), Ok(1));
    assert_eq!(parse_photo_id("1e0"), Ok(1));
    assert_eq!(parse_photo_id("01"), Ok(1));
}

#[test]
fn invalid_photo_id_keeps_raw_input() {
    assert_eq!(
        parse_photo_id(" x "),
        Err(RouteError::InvalidPhotoId(" x ".to_owned()))
    );
}

#[test]
fn route_error_messages_name_the_input() {
    assert_eq!(RouteError::InvalidPhotoId("x".to_owned()).to_string(), "invalid photo id: \"x\"");
    assert_eq!(RouteError::UnknownPath("/nope".to_owned()).to_string(), "unknown path: /nope");
}
