use std::fs;
use std::process::{Command, Output};

fn edit_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edit_report"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run edit_report")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn example_pair_runs_by_default() {
    let output = edit_report(&[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Example (aabab -> babb):\n"));
    assert!(text.contains("Final cost(n,m) = cost(5,4) = 1.3\n"));
}

#[test]
fn failed_file_does_not_stop_later_inputs() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("missing.txt");
    let short = dir.path().join("short.txt");
    let good = dir.path().join("good.txt");
    fs::write(&short, "abc\n").expect("write short input");
    fs::write(&good, "a\nb\n").expect("write good input");

    let output = edit_report(&[
        "--skip-example",
        missing.to_str().expect("utf-8 path"),
        short.to_str().expect("utf-8 path"),
        good.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    assert!(!text.contains("Example"));
    assert!(text.starts_with("Provided inputs:\n"));
    assert!(text.contains(&format!("{}:\n", missing.display())));
    assert!(text.contains(&format!("{}:\n", short.display())));
    assert!(text.ends_with(&format!(
        "{}:\n\
         Input Sequences:\nFrom: a\nTo: b\n\n\
         Matrix:\n \
          ,    ,    ,   b\n \
          , i/j, [0], [1]\n \
          , [0], 0.0, 0.5\n\
         a, [1], 0.4, 0.9\n\n\
         Final cost(n,m) = cost(1,1) = 0.9\n\n\
         Decision Sequences:\n\
         [[0,0], [1,0]-D, [1,1]-I]\n\
         [[0,0], [0,1]-I, [1,1]-D]\n\n",
        good.display()
    )));

    let errors = stderr(&output);
    assert_eq!(errors.matches("edit_report: cannot use input").count(), 2);
    assert!(errors.contains("expected 2 lines of input, found 1"));
}

#[test]
fn all_files_readable_exits_successfully() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let good = dir.path().join("good.txt");
    fs::write(&good, "kitten\nsitting\n").expect("write input");

    let output = edit_report(&["--skip-example", good.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
}

#[test]
fn invalid_cost_flags_exit_with_status_two() {
    for args in [
        ["--insert=-0.5"],
        ["--change=0.25"],
        ["--delete=1e18"],
    ] {
        let output = edit_report(&args);
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        assert!(stdout(&output).is_empty(), "args {args:?}");
        assert!(stderr(&output).starts_with("edit_report: cost"), "args {args:?}");
    }
}
