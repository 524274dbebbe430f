use std::cell::RefCell;
use std::rc::Rc;

use storm_days::extensions::Signal;

#[test]
fn handlers_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut signal: Signal<u32> = Signal::new();

    let first = Rc::clone(&log);
    signal.tap(move |value| first.borrow_mut().push(("first", *value)));
    let second = Rc::clone(&log);
    signal.tap(move |value| second.borrow_mut().push(("second", *value)));

    signal.raise(&7);
    assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    assert_eq!(signal.len(), 2);
}

#[test]
fn untap_removes_only_the_given_handler() {
    let hits = Rc::new(RefCell::new(0u32));
    let mut signal: Signal<()> = Signal::new();

    let counter = Rc::clone(&hits);
    let kept = signal.tap(move |_| *counter.borrow_mut() += 1);
    let dropped = signal.tap(|_| panic!("removed handler must not run"));

    assert!(signal.untap(dropped));
    assert!(!signal.untap(dropped));
    signal.raise(&());
    assert_eq!(*hits.borrow(), 1);

    assert!(signal.untap(kept));
    assert!(signal.is_empty());
    signal.raise(&());
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn subscription_ids_are_not_reused() {
    let mut signal: Signal<u8> = Signal::default();
    let a = signal.tap(|_| {});
    assert!(signal.untap(a));
    let b = signal.tap(|_| {});
    assert_ne!(a, b);
}
