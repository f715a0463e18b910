use std::sync::mpsc;

use cellkit::{Error, Event, InputReader, Key};

#[test]
fn test_reader_delivers_in_order() {
    let (tx, rx) = mpsc::channel();
    let reader = InputReader::from_receiver(rx);

    tx.send(Event::key(Key::Down)).unwrap();
    tx.send(Event::key(Key::Enter)).unwrap();

    assert_eq!(reader.next().unwrap(), Event::key(Key::Down));
    assert_eq!(reader.try_next().unwrap(), Some(Event::key(Key::Enter)));
    assert_eq!(reader.try_next().unwrap(), None);
}

#[test]
fn test_reader_reports_closed_source() {
    let (tx, rx) = mpsc::channel::<Event>();
    let reader = InputReader::from_receiver(rx);
    drop(tx);

    assert!(matches!(reader.next(), Err(Error::InputClosed)));
    assert!(matches!(reader.try_next(), Err(Error::InputClosed)));
}
