//! Tests for port fixtures and shared port types.

use std::time::Duration;

use rstest::rstest;

use super::*;
use crate::domain::wallet::{AccountAddress, Lamports};

#[test]
fn geolocation_options_default_to_accurate_short_lived_reads() {
    let options = GeolocationOptions::default();
    assert!(options.high_accuracy);
    assert_eq!(options.timeout, Duration::from_secs(10));
    assert_eq!(options.max_cache_age, Duration::from_secs(300));
}

#[rstest]
#[case(GeolocationError::permission_denied("blocked"), "location permission denied: blocked")]
#[case(GeolocationError::position_unavailable("no fix"), "position unavailable: no fix")]
#[case(GeolocationError::timeout(10_000_u64), "location request timed out after 10000 ms")]
#[case(GeolocationError::unsupported(), "geolocation is not supported on this platform")]
fn geolocation_errors_render_messages(#[case] err: GeolocationError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
#[case(GeolocationError::permission_denied("blocked"), "permission_denied")]
#[case(GeolocationError::position_unavailable("no fix"), "position_unavailable")]
#[case(GeolocationError::timeout(10_000_u64), "timeout")]
#[case(GeolocationError::unsupported(), "unsupported")]
fn geolocation_errors_expose_log_kinds(#[case] err: GeolocationError, #[case] expected: &str) {
    assert_eq!(err.kind(), expected);
}

#[test]
fn duration_millis_saturates() {
    assert_eq!(duration_millis(Duration::from_millis(1500)), 1500);
    assert_eq!(duration_millis(Duration::MAX), u64::MAX);
}

#[test]
fn in_memory_intro_flag_starts_unseen_and_latches() {
    let store = InMemoryIntroFlagStore::default();
    assert_eq!(store.has_seen_intro(), Ok(false));
    store.mark_intro_seen().expect("in-memory write");
    assert_eq!(store.has_seen_intro(), Ok(true));
    assert_eq!(InMemoryIntroFlagStore::seen().has_seen_intro(), Ok(true));
}

#[tokio::test]
async fn fixture_balance_source_returns_configured_amount() {
    let source = FixtureBalanceSource(Lamports::new(2_500_000_000));
    let account = AccountAddress::new("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").expect("valid");

    let balance = source.balance(&account).await.expect("fixture balance");

    assert_eq!(balance, Lamports::new(2_500_000_000));
}
