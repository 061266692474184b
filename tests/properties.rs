//! Property-based tests for tokens, ownership and request validation

use chrono::{Datelike, NaiveDate, Timelike};
use proptest::prelude::*;

use neighborly::backend::auth::ownership::can_mutate;
use neighborly::backend::auth::{AuthError, TokenIssuer};
use neighborly::shared::event::parse_event_date;
use neighborly::shared::validation::present;
use neighborly::shared::Post;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("property-secret", chrono::Duration::minutes(15))
}

proptest! {
    #[test]
    fn test_token_roundtrip(user_id in any::<i64>()) {
        let token = issuer().issue(user_id).unwrap();
        prop_assert_eq!(issuer().verify(&token), Ok(user_id));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected(user_id in 1i64..1_000_000, secret in "[a-z]{8,16}") {
        prop_assume!(secret != "property-secret");
        let token = TokenIssuer::new(&secret, chrono::Duration::minutes(15))
            .issue(user_id)
            .unwrap();
        prop_assert_eq!(issuer().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_garbage_is_never_accepted(garbage in "[A-Za-z0-9_.-]{0,64}") {
        prop_assert!(issuer().verify(&garbage).is_err());
    }

    #[test]
    fn test_only_owner_can_mutate(owner in any::<i64>(), actor in any::<i64>()) {
        let post = Post {
            id: 1,
            content: "hello".to_string(),
            timestamp: chrono::Utc::now(),
            created_by_id: owner,
        };
        prop_assert_eq!(can_mutate(&post, actor), owner == actor);
    }

    #[test]
    fn test_event_date_is_midnight(days in 0i64..36_500) {
        let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(days);
        let parsed = parse_event_date(&day.format("%Y-%m-%d").to_string()).unwrap();
        prop_assert_eq!(parsed.date(), day);
        prop_assert_eq!(parsed.hour() + parsed.minute() + parsed.second(), 0);
        prop_assert_eq!(parsed.year(), day.year());
    }

    #[test]
    fn test_present_keeps_non_empty(value in ".{1,32}") {
        prop_assert_eq!(present(Some(value.clone())), Some(value));
    }
}

#[test]
fn test_present_drops_empty() {
    assert_eq!(present(Some(String::new())), None);
    assert_eq!(present(None), None);
}
