use super::protocol::*;
use super::spawn_listener;
use crossbeam_channel::unbounded;
use serde_json::json;
use std::io::Cursor;
use std::time::Duration;

const RECV_WAIT: Duration = Duration::from_secs(2);

// -------------------------------------------------------------------------
// Command Mapping Tests
// -------------------------------------------------------------------------

#[test]
fn test_command_from_name() {
    assert_eq!(PanelCommand::from_name("show"), Some(PanelCommand::Show));
    assert_eq!(PanelCommand::from_name("hide"), Some(PanelCommand::Hide));
    assert_eq!(PanelCommand::from_name("quit"), Some(PanelCommand::Quit));

    assert_eq!(PanelCommand::from_name("bogus"), None);
    assert_eq!(PanelCommand::from_name(""), None);
    // Wire names are exact-match; no case folding.
    assert_eq!(PanelCommand::from_name("Show"), None);
    assert_eq!(PanelCommand::from_name("QUIT"), None);
}

#[test]
fn test_command_as_str() {
    assert_eq!(PanelCommand::Show.as_str(), "show");
    assert_eq!(PanelCommand::Hide.as_str(), "hide");
    assert_eq!(PanelCommand::Quit.as_str(), "quit");
}

// -------------------------------------------------------------------------
// Decode Tests
// -------------------------------------------------------------------------

#[test]
fn test_decode_show_with_settings() {
    let line = r#"{"payload":{"name":"show","args":[{"WindowSize":[800,600],"WindowTitle":"Test"}]}}"#;
    let dispatch = decode_line(line).expect("valid envelope");
    assert_eq!(dispatch.command, PanelCommand::Show);
    assert_eq!(dispatch.args.len(), 1);
    assert_eq!(dispatch.args[0]["WindowTitle"], json!("Test"));
}

#[test]
fn test_decode_defaults_missing_args_to_empty() {
    let dispatch = decode_line(r#"{"payload":{"name":"hide"}}"#).expect("valid envelope");
    assert_eq!(dispatch.command, PanelCommand::Hide);
    assert!(dispatch.args.is_empty());
}

#[test]
fn test_decode_passes_args_through_unchanged() {
    let line = r#"{"payload":{"name":"quit","args":[42,"extra",{"k":true}]}}"#;
    let dispatch = decode_line(line).expect("valid envelope");
    assert_eq!(
        dispatch.args,
        vec![json!(42), json!("extra"), json!({"k": true})]
    );
}

#[test]
fn test_decode_unknown_name_renders_exact_diagnostic() {
    let err = decode_line(r#"{"payload":{"name":"bogus"}}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Unknown(_)));
    assert_eq!(err.to_string(), "'bogus' was unavailable.");
}

#[test]
fn test_decode_rejects_malformed_json() {
    let err = decode_line("not json at all").unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_decode_rejects_envelope_without_name() {
    let err = decode_line(r#"{"payload":{"args":[]}}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn test_decode_rejects_missing_payload() {
    let err = decode_line(r#"{"name":"show"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Malformed(_)));
}

// -------------------------------------------------------------------------
// Listener Thread Tests
// -------------------------------------------------------------------------

#[test]
fn test_listener_survives_garbage_then_dispatches() {
    let input = "\
garbage line\n\
{\"payload\":{}}\n\
{\"payload\":{\"name\":\"bogus\"}}\n\
{not even json\n\
{\"payload\":{\"name\":\"show\"}}\n";
    let (tx, rx) = unbounded();
    let handle = spawn_listener(Cursor::new(input.to_string()), tx);

    let dispatch = rx.recv_timeout(RECV_WAIT).expect("one dispatch");
    assert_eq!(dispatch.command, PanelCommand::Show);

    // Exactly one dispatch: the channel disconnects after EOF without
    // producing anything for the bad lines.
    assert!(rx.recv_timeout(RECV_WAIT).is_err());
    handle.join().expect("listener exits cleanly");
}

#[test]
fn test_listener_preserves_arrival_order() {
    let input = "\
{\"payload\":{\"name\":\"show\"}}\n\
{\"payload\":{\"name\":\"hide\"}}\n\
{\"payload\":{\"name\":\"quit\"}}\n";
    let (tx, rx) = unbounded();
    let handle = spawn_listener(Cursor::new(input.to_string()), tx);

    let commands: Vec<_> = (0..3)
        .map(|_| rx.recv_timeout(RECV_WAIT).expect("dispatch").command)
        .collect();
    assert_eq!(
        commands,
        vec![PanelCommand::Show, PanelCommand::Hide, PanelCommand::Quit]
    );
    handle.join().expect("listener exits cleanly");
}

#[test]
fn test_listener_skips_blank_lines() {
    let input = "\n   \n{\"payload\":{\"name\":\"hide\"}}\n\n";
    let (tx, rx) = unbounded();
    let handle = spawn_listener(Cursor::new(input.to_string()), tx);

    let dispatch = rx.recv_timeout(RECV_WAIT).expect("dispatch");
    assert_eq!(dispatch.command, PanelCommand::Hide);
    assert!(rx.recv_timeout(RECV_WAIT).is_err());
    handle.join().expect("listener exits cleanly");
}

#[test]
fn test_listener_exits_when_receiver_dropped() {
    let input = "\
{\"payload\":{\"name\":\"show\"}}\n\
{\"payload\":{\"name\":\"hide\"}}\n";
    let (tx, rx) = unbounded();
    drop(rx);
    let handle = spawn_listener(Cursor::new(input.to_string()), tx);
    handle.join().expect("listener exits cleanly");
}
