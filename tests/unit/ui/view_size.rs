use super::*;
use parking_lot::Mutex as TestMutex;

fn recorder() -> (ViewSizeListener, Arc<TestMutex<Vec<bool>>>) {
    let calls = Arc::new(TestMutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let listener: ViewSizeListener = Arc::new(move |maximized| sink.lock().push(maximized));
    (listener, calls)
}

#[test]
fn maximize_then_minimize_updates_flag() {
    let registry = ViewSizeRegistry::new();
    assert_eq!(registry.is_maximized("page1"), Ok(false));

    registry.maximize("page1").expect("maximize");
    assert_eq!(registry.is_maximized("page1"), Ok(true));

    registry.minimize("page1").expect("minimize");
    assert_eq!(registry.is_maximized("page1"), Ok(false));
}

#[test]
fn listener_is_called_with_new_value() {
    let registry = ViewSizeRegistry::new();
    let (listener, calls) = recorder();
    registry.add_listener("page1", listener);

    registry.maximize("page1").expect("maximize");
    assert_eq!(*calls.lock(), vec![true]);
    assert_eq!(registry.is_maximized("page1"), Ok(true));
}

#[test]
fn adding_same_listener_twice_notifies_once() {
    let registry = ViewSizeRegistry::new();
    let (listener, calls) = recorder();
    registry.add_listener("page1", Arc::clone(&listener));
    registry.add_listener("page1", listener);
    assert_eq!(registry.listener_count("page1"), 1);

    registry.maximize("page1").expect("maximize");
    registry.minimize("page1").expect("minimize");
    assert_eq!(*calls.lock(), vec![true, false]);
}

#[test]
fn listeners_are_scoped_to_their_page() {
    let registry = ViewSizeRegistry::new();
    let (listener, calls) = recorder();
    registry.add_listener("page1", listener);

    registry.maximize("page2").expect("maximize");
    assert!(calls.lock().is_empty());
    assert_eq!(registry.is_maximized("page1"), Ok(false));
}

#[test]
fn removed_listener_is_not_called() {
    let registry = ViewSizeRegistry::new();
    let (listener, calls) = recorder();
    registry.add_listener("page1", Arc::clone(&listener));
    registry.remove_listener("page1", &listener);
    registry.remove_listener("page1", &listener);
    registry.remove_listener("never-registered", &listener);

    registry.maximize("page1").expect("maximize");
    assert!(calls.lock().is_empty());
}

#[test]
fn empty_page_id_is_rejected() {
    let registry = ViewSizeRegistry::new();
    assert_eq!(registry.maximize(""), Err(ViewSizeError::MissingPageId));
    assert_eq!(registry.minimize("  "), Err(ViewSizeError::MissingPageId));
    assert_eq!(registry.is_maximized(""), Err(ViewSizeError::MissingPageId));
}

#[test]
fn listener_may_reenter_registry() {
    let registry = Arc::new(ViewSizeRegistry::new());
    let seen = Arc::new(TestMutex::new(None));
    let (r, s) = (Arc::clone(&registry), Arc::clone(&seen));
    registry.add_listener(
        "page1",
        Arc::new(move |_| {
            *s.lock() = r.is_maximized("page1").ok();
        }),
    );

    registry.maximize("page1").expect("maximize");
    assert_eq!(*seen.lock(), Some(true));
}

#[test]
fn registries_are_independent() {
    let a = ViewSizeRegistry::new();
    let b = ViewSizeRegistry::new();
    a.maximize("page1").expect("maximize");
    assert_eq!(b.is_maximized("page1"), Ok(false));
}
