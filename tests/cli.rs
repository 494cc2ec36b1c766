#![cfg(feature = "cli")]

use lin_pid::cli::{EXIT_FAILURE, EXIT_SUCCESS, run};

fn lin_pid(args: &[&str]) -> (u8, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("lin_pid").chain(args.iter().copied());
    let code = run(argv, &mut out, &mut err, false);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn quiet_prints_pid_only() {
    assert_eq!(lin_pid(&["27", "-q"]), (EXIT_SUCCESS, String::from("E7\n"), String::new()));
    assert_eq!(lin_pid(&["--quiet", "0x3C"]).1, "3C\n");
    assert_eq!(lin_pid(&["0x3C", "-q", "--no-new-line"]).1, "3C");
}

#[test]
fn format_flag_before_or_after_id() {
    assert_eq!(lin_pid(&["--dec", "27", "-q"]).1, "5B\n");
    assert_eq!(lin_pid(&["27", "-d", "-q"]).1, "5B\n");
    assert_eq!(lin_pid(&["-h", "27", "-q"]).1, "E7\n");
    assert_eq!(lin_pid(&["27", "--hex", "-q"]).1, "E7\n");
}

#[test]
fn default_output_shows_id_and_pid() {
    let (code, out, _) = lin_pid(&["27d", "--color", "never"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(out, "\nID:  0x1B\nPID: 0x5B\n\n");
}

#[test]
fn color_always_emits_ansi_codes() {
    let (code, out, _) = lin_pid(&["27", "--color", "always"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.contains("\u{1b}["), "{out:?}");
    assert!(out.contains("0xE7"));
}

#[test]
fn color_auto_is_plain_when_not_a_terminal() {
    let (code, out, _) = lin_pid(&["27"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(out, "\nID:  0x27\nPID: 0xE7\n\n");
}

#[test]
fn json_output() {
    let (code, out, _) = lin_pid(&["0x27", "--json"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(out.trim(), r#"{"id":39,"pid":231}"#);
}

#[test]
fn conflicting_flags_fail() {
    let (code, out, err) = lin_pid(&["27", "--hex", "--dec"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.contains("cannot be used together"), "{err}");
}

#[test]
fn out_of_range_id_fails() {
    let (code, _, err) = lin_pid(&["0x40", "-q"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("out of range"), "{err}");

    let (code, _, _) = lin_pid(&["64d"]);
    assert_eq!(code, EXIT_FAILURE);
}

#[test]
fn parse_errors_fail() {
    let (code, _, err) = lin_pid(&["123"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("Too many digits"), "{err}");

    let (code, _, err) = lin_pid(&["--dec", "3F"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("decimal format"), "{err}");
}

#[test]
fn no_arguments_prints_help() {
    let (code, out, _) = lin_pid(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.contains("Supported hexadecimal formats"));
    assert!(out.contains("--dec"));
}

#[test]
fn help_flag_prints_help() {
    let (code, out, err) = lin_pid(&["--help"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(err.is_empty());
    assert!(out.contains("Supported decimal formats"));
}

#[test]
fn table_lists_every_id() {
    let (code, out, _) = lin_pid(&["--table", "--color", "never"]);
    assert_eq!(code, EXIT_SUCCESS);
    let rows: Vec<&str> = out.lines().filter(|l| l.starts_with("| 0x")).collect();
    assert_eq!(rows.len(), 64);
    assert_eq!(rows[0], "| 0x0  | 0x80 |");
    assert_eq!(rows[0x27], "| 0x27 | 0xE7 |");
}

#[test]
fn table_as_json() {
    let (code, out, _) = lin_pid(&["-t", "--json"]);
    assert_eq!(code, EXIT_SUCCESS);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 64);
    assert_eq!(entries[0x3F]["pid"], 0xBF);
}

#[test]
fn table_with_id_is_rejected() {
    let (code, _, err) = lin_pid(&["--table", "27"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(!err.is_empty());
}

#[test]
fn unknown_flag_fails() {
    let (code, _, err) = lin_pid(&["27", "--bogus"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(err.contains("--bogus"), "{err}");
}
