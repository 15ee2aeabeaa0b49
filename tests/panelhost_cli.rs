use std::io::Write;
use std::process::{Command, Stdio};

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn panelhost_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_panelhost").expect("panelhost test binary not built")
}

#[test]
fn help_mentions_name() {
    let output = Command::new(panelhost_bin())
        .arg("--help")
        .output()
        .expect("run panelhost --help");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("panelhost"));
}

#[test]
fn rejects_invalid_window_size() {
    let output = Command::new(panelhost_bin())
        .args(["--demo", "--window-width", "0"])
        .output()
        .expect("run panelhost with bad width");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--window-width"));
}

#[test]
fn demo_mode_exits_cleanly() {
    let output = Command::new(panelhost_bin())
        .arg("--demo")
        .output()
        .expect("run panelhost --demo");
    assert!(output.status.success());
}

#[test]
fn attached_mode_exits_on_quit_command() {
    let mut child = Command::new(panelhost_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn panelhost");

    let mut stdin = child.stdin.take().expect("child stdin");
    // Malformed and unknown lines first; the listener must survive them and
    // still honor the quit.
    stdin
        .write_all(
            b"not json\n\
              {\"payload\":{\"name\":\"bogus\"}}\n\
              {\"payload\":{\"name\":\"show\",\"args\":[{\"WindowTitle\":\"T\"}]}}\n\
              {\"payload\":{\"name\":\"quit\"}}\n",
        )
        .expect("write commands");
    drop(stdin);

    let status = child.wait().expect("wait for panelhost");
    assert!(status.success());
}

#[test]
fn attached_mode_exits_on_eof() {
    let mut child = Command::new(panelhost_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn panelhost");

    drop(child.stdin.take());
    let status = child.wait().expect("wait for panelhost");
    assert!(status.success());
}
