mod common;

use inspector_core::config::FetchConfig;
use inspector_core::error::InspectorError;
use inspector_core::load::LoadTicketer;
use inspector_core::state::LoadId;

use common::{mock_loader, offline_loader, png_resource, solid_data_url, solid_png, MockFetcher, RED};

#[test]
fn test_ticketer_ids_increase_from_one() {
    let ticketer = LoadTicketer::new();
    let (a, _) = ticketer.next();
    let (b, _) = ticketer.next();
    assert_eq!(a, LoadId(1));
    assert_eq!(b, LoadId(2));
}

#[test]
fn test_newer_ticket_cancels_older() {
    let ticketer = LoadTicketer::new();
    let (_, first) = ticketer.next();
    assert!(!first.is_cancelled());

    let (_, second) = ticketer.next();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn test_cloned_ticketer_shares_counter() {
    let ticketer = LoadTicketer::new();
    let other = ticketer.clone();
    let (_, token) = ticketer.next();
    let (id, _) = other.next();
    assert_eq!(id, LoadId(2));
    assert!(token.is_cancelled());
}

#[test]
fn test_load_data_url_reports_natural_size() {
    let ticketer = LoadTicketer::new();
    let (_, token) = ticketer.next();
    let image = offline_loader()
        .load(&solid_data_url(37, 19, RED), &token)
        .unwrap();
    assert_eq!(image.natural_size().width, 37);
    assert_eq!(image.natural_size().height, 19);
}

#[test]
fn test_cancelled_load_does_not_fetch() {
    let url = "https://example.com/a.png";
    let fetcher = MockFetcher::default().with(url, png_resource(solid_png(2, 2, RED), true));
    let (loader, fetcher) = mock_loader(fetcher, FetchConfig::default());

    let ticketer = LoadTicketer::new();
    let (_, stale) = ticketer.next();
    ticketer.next();

    let err = loader.load(url, &stale).unwrap_err();
    assert!(matches!(err, InspectorError::Cancelled));
    assert!(fetcher.requests.lock().unwrap().is_empty());
}

#[test]
fn test_run_tags_outcome_with_request_id() {
    let ticketer = LoadTicketer::new();
    let (id, token) = ticketer.next();
    let request = inspector_core::load::LoadRequest {
        id,
        source: "not a real file.png".into(),
        token,
    };
    let outcome = offline_loader().run(request);
    assert_eq!(outcome.id, id);
    assert!(matches!(outcome.result, Err(InspectorError::Io(_))));
}

#[test]
fn test_corrupt_bytes_fail_to_decode() {
    let (_, token) = LoadTicketer::new().next();
    let url = inspector_core::source::DataUrl::encode("image/png", b"definitely not a png");
    let err = offline_loader().load(&url, &token).unwrap_err();
    assert!(matches!(err, InspectorError::Image(_)));
}
