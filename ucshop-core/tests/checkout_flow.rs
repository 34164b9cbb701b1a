use chrono::{TimeZone, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ucshop_core::{
    Checkout, ExternalAction, FixedClock, HISTORY_KEY, MemoryStorage, Notice, PaymentMethod,
    PurchaseHistory, PurchaseRecord, PurchaseStatus, donation_url, find_package, packages,
};

fn checkout_on(storage: &MemoryStorage) -> Checkout<MemoryStorage, FixedClock> {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 18, 0, 0).unwrap());
    Checkout::with_clock(PurchaseHistory::load(storage.clone()), clock)
}

#[test]
fn sberbank_purchase_is_recorded_completed() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);

    co.select_package(find_package(2).unwrap());
    co.set_player_id("5123456");
    co.set_payment_method("sberbank".parse().unwrap());
    let outcome = co.submit().unwrap();

    let first = &co.history().all()[0];
    assert_eq!(first, &outcome.record);
    assert_eq!(first.amount, 325);
    assert_eq!(first.price, 300);
    assert_eq!(first.payment_method, "Карта Сбербанк");
    assert_eq!(first.status, PurchaseStatus::Completed);
    assert!(!co.state().purchase_open);
    assert!(co.state().player_id.is_empty());
    assert_eq!(co.state().payment_method, PaymentMethod::default());
}

#[test]
fn short_player_id_changes_nothing() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);

    co.select_package(find_package(2).unwrap());
    co.set_player_id("abc");
    let err = co.submit().unwrap_err();

    assert!(matches!(err.notice(), Notice::InvalidPlayerId { min_len: 6 }));
    assert!(co.history().is_empty());
    assert!(co.state().purchase_open);
    assert!(storage.raw(HISTORY_KEY).is_none());
}

#[test]
fn donation_alerts_purchase_is_pending_with_redirect() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);

    co.select_package(find_package(1).unwrap());
    co.set_player_id("7000001");
    co.set_payment_method(PaymentMethod::DonationAlerts);
    let outcome = co.submit().unwrap();

    assert_eq!(outcome.record.status, PurchaseStatus::Pending);
    match outcome.external {
        Some(ExternalAction::OpenPaymentPage { url, record_id }) => {
            assert_eq!(url, donation_url(find_package(1).unwrap(), "7000001"));
            assert!(url.contains("amount=60"));
            assert!(url.contains("player_id=7000001"));
            assert_eq!(record_id, outcome.record.id);
        }
        None => panic!("expected a redirect"),
    }
}

#[test]
fn resubmitting_creates_independent_records() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);

    for _ in 0..2 {
        co.select_package(find_package(3).unwrap());
        co.set_player_id("1111111");
        co.submit().unwrap();
    }

    let ids: Vec<&str> = co.history().all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(co.history().total(), 1200);
}

#[test]
fn history_survives_reload() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);
    co.select_package(find_package(5).unwrap());
    co.set_player_id("2222222");
    co.submit().unwrap();
    co.clock().advance_millis(1500);
    co.select_package(find_package(1).unwrap());
    co.set_player_id("3333333");
    co.set_payment_method(PaymentMethod::DonationAlerts);
    co.submit().unwrap();

    let reloaded = PurchaseHistory::load(storage.clone());
    assert_eq!(reloaded.all(), co.history().all());
    assert_eq!(reloaded.total(), 3060);
}

#[test]
fn serialization_round_trip_preserves_every_field() {
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);
    for (idx, method) in PaymentMethod::ALL.into_iter().enumerate() {
        co.select_package(&packages()[idx]);
        co.set_player_id(format!("player-{idx}"));
        co.set_payment_method(method);
        co.submit().unwrap();
        co.clock().advance_millis(7);
    }

    let json = serde_json::to_string(co.history().all()).unwrap();
    let back: Vec<PurchaseRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, co.history().all());
}

#[test]
fn random_sessions_keep_order_and_totals() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED_0C0C);
    let storage = MemoryStorage::new();
    let mut co = checkout_on(&storage);

    for _ in 0..200 {
        let package = &packages()[rng.gen_range(0..packages().len())];
        let method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];
        let id_len = rng.gen_range(0..10);
        let player_id: String = (0..id_len)
            .map(|_| char::from(b'0' + rng.gen_range(0..10)))
            .collect();

        let before_len = co.history().len();
        let before_total = co.history().total();

        co.select_package(package);
        co.set_player_id(player_id.clone());
        co.set_payment_method(method);
        let result = co.submit();

        if id_len < 6 {
            assert!(result.is_err());
            assert_eq!(co.history().len(), before_len);
            assert_eq!(co.history().total(), before_total);
            co.close_purchase();
        } else {
            let outcome = result.unwrap();
            assert_eq!(co.history().len(), before_len + 1);
            assert_eq!(&co.history().all()[0], &outcome.record);
            assert_eq!(
                co.history().total(),
                before_total + u64::from(package.price)
            );
            let expected = if method.is_redirect() {
                PurchaseStatus::Pending
            } else {
                PurchaseStatus::Completed
            };
            assert_eq!(outcome.record.status, expected);
        }
        let sum: u64 = co.history().all().iter().map(|r| u64::from(r.price)).sum();
        assert_eq!(co.history().total(), sum);
        co.clock().advance_millis(rng.gen_range(0..3));
    }
}
