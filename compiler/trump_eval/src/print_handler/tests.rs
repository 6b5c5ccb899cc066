use super::*;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    assert_eq!(handler.get_output(), "hello\n");
    assert_eq!(handler.get_errors(), "");
}

#[test]
fn buffer_handler_keeps_channels_apart() {
    let handler = BufferPrintHandler::new();
    handler.println("out");
    handler.eprintln("err");
    handler.println("more");
    assert_eq!(handler.get_output(), "out\nmore\n");
    assert_eq!(handler.get_errors(), "err\n");
}

#[test]
fn buffer_handler_clear_empties_both_buffers() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.eprintln("oops");
    handler.clear();
    assert!(handler.get_output().is_empty());
    assert!(handler.get_errors().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.get_errors(), "");
}

#[test]
fn buffer_handler_factory_creates_working_handler() {
    let handler = buffer_handler();
    handler.println("test");
    handler.eprintln("warn");
    assert_eq!(handler.get_output(), "test\n");
    assert_eq!(handler.get_errors(), "warn\n");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    handler.eprintln("world");
    handler.clear();
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.get_errors(), "");
}
