use gq::cli::{CliError, RunOptions, execute};

const COMMITS: &str = r#"[
  {
    "sha": "a1",
    "commit": {
      "message": "Fix parser",
      "committer": { "name": "Ana", "date": "2024-01-02" }
    },
    "parents": [
      { "sha": "p1", "html_url": "https://example.com/p1" }
    ]
  },
  {
    "sha": "b2",
    "commit": {
      "message": "Add tests",
      "committer": { "name": "Ben", "date": "2024-01-03" }
    },
    "parents": [
      { "sha": "p2", "html_url": "https://example.com/p2" },
      { "sha": "p3", "html_url": "https://example.com/p3" }
    ]
  }
]"#;

fn options(query: &str, input: &str) -> RunOptions {
    RunOptions {
        query: Some(query.to_string()),
        input: Some(input.to_string()),
        ..RunOptions::default()
    }
}

fn run(options: &RunOptions) -> Result<String, CliError> {
    let mut out = Vec::new();
    execute(options, &mut out)?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

fn run_query(query: &str, input: &str) -> String {
    run(&options(query, input)).unwrap()
}

// ============================================================================
// Output shape
// ============================================================================

#[test]
fn test_iter() {
    assert_eq!(run_query(".[]", "[1,2]"), "1\n2\n");
}

#[test]
fn test_capture_iter() {
    assert_eq!(run_query("[.[]]", "[1,2]"), "[\n  1,\n  2\n]\n");
}

#[test]
fn test_pipe_iter() {
    assert_eq!(run_query(".[] | [.]", "[1,2]"), "[\n  1\n]\n[\n  2\n]\n");
}

#[test]
fn test_cartesian_product() {
    let expected = "\
{
  \"a\": 1,
  \"b\": 1
}
{
  \"a\": 1,
  \"b\": 2
}
{
  \"a\": 2,
  \"b\": 1
}
{
  \"a\": 2,
  \"b\": 2
}
";
    assert_eq!(run_query("{a:.[], b:.[]}", "[1, 2]"), expected);
}

#[test]
fn test_piped_cartesian_product() {
    assert_eq!(
        run_query("{a:.[], b:.[]} | .[]", "[1, 2]"),
        "1\n1\n1\n2\n2\n1\n2\n2\n"
    );
}

#[test]
fn test_piped_iter() {
    assert_eq!(run_query("[.[].[]]", "[[1,2], [3]]"), "[\n  1,\n  2,\n  3\n]\n");
}

#[test]
fn test_scalar_output() {
    assert_eq!(run_query(".a", r#"{"a": 1.5}"#), "1.50\n");
    assert_eq!(run_query(".b", r#"{"a": 1}"#), "null\n");
    assert_eq!(run_query(".", "true"), "true\n");
}

#[test]
fn test_compact_output() {
    let mut opts = options("{a:.[], b:.[]}", "[1, 2]");
    opts.compact = true;
    assert_eq!(
        run(&opts).unwrap(),
        "{\"a\":1,\"b\":1}\n{\"a\":1,\"b\":2}\n{\"a\":2,\"b\":1}\n{\"a\":2,\"b\":2}\n"
    );
}

#[test]
fn test_empty_result_prints_nothing() {
    assert_eq!(run_query(".[]", "[]"), "");
}

// ============================================================================
// Commit log walkthrough
// ============================================================================

#[test]
fn test_parent_shas() {
    assert_eq!(
        run_query(".[] | .parents[].sha", COMMITS),
        "\"p1\"\n\"p2\"\n\"p3\"\n"
    );
}

#[test]
fn test_first_commit_summary() {
    let expected = "\
{
  \"message\": \"Fix parser\",
  \"name\": \"Ana\"
}
";
    assert_eq!(
        run_query(
            ".[0] | {message: .commit.message, name: .commit.committer.name}",
            COMMITS
        ),
        expected
    );
}

#[test]
fn test_all_commit_summaries() {
    let expected = "\
[
  {
    \"message\": \"Fix parser\",
    \"name\": \"Ana\"
  },
  {
    \"message\": \"Add tests\",
    \"name\": \"Ben\"
  }
]
";
    assert_eq!(
        run_query(
            "[.[] | {message: .commit.message, name: .commit.committer.name}]",
            COMMITS
        ),
        expected
    );
}

#[test]
fn test_commit_summaries_with_parents() {
    let expected = "\
[
  {
    \"message\": \"Fix parser\",
    \"name\": \"Ana\",
    \"parents\": [
      \"https://example.com/p1\"
    ]
  },
  {
    \"message\": \"Add tests\",
    \"name\": \"Ben\",
    \"parents\": [
      \"https://example.com/p2\",
      \"https://example.com/p3\"
    ]
  }
]
";
    assert_eq!(
        run_query(
            "[.[] | {message: .commit.message, name: .commit.committer.name, parents: [.parents[].html_url]}]",
            COMMITS
        ),
        expected
    );
}

// ============================================================================
// Debug mode
// ============================================================================

#[test]
fn test_debug_prints_ast_before_results() {
    let mut opts = options(".[] | {a: .}", "[1]");
    opts.debug = true;
    let expected = "\
Generated AST:

Pipe
  Index: Iterate
  Dict
    Assign: a
      Index: Root

{
  \"a\": 1
}
";
    assert_eq!(run(&opts).unwrap(), expected);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_no_program() {
    let opts = RunOptions {
        input: Some("{}".to_string()),
        ..RunOptions::default()
    };
    let err = run(&opts).unwrap_err();
    assert!(matches!(err, CliError::NoProgram));
    assert_eq!(err.to_string(), "no program provided");
}

#[test]
fn test_no_input() {
    let opts = RunOptions {
        query: Some(".".to_string()),
        ..RunOptions::default()
    };
    let err = run(&opts).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
    assert_eq!(err.to_string(), "no input provided on stdin");
}

#[test]
fn test_illegal_token() {
    let err = run(&options(".a + .b", "{}")).unwrap_err();
    assert!(matches!(err, CliError::Lex(_)));
    assert_eq!(err.to_string(), "illegal token found: '+' at position 3");
}

#[test]
fn test_parse_error() {
    let err = run(&options("[.a", "{}")).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
    assert_eq!(err.to_string(), "Parse error: expected ']', found end of input");
}

#[test]
fn test_eval_error_writes_no_results() {
    let mut out = Vec::new();
    let err = execute(&options(".[5]", "[1, 2]"), &mut out).unwrap_err();
    assert!(matches!(err, CliError::Eval(_)));
    assert_eq!(
        err.to_string(),
        "Evaluation error: Index out of bounds: index 5 on array of length 2"
    );
    assert!(out.is_empty());
}

#[test]
fn test_type_error_message() {
    let err = run(&options(".a", "[1]")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Evaluation error: Type error: cannot index array with Field(a)"
    );
}

#[test]
fn test_invalid_json() {
    let err = run(&options(".", "{\"a\": ")).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}

#[test]
fn test_illegal_token_reported_before_input_is_read() {
    let opts = RunOptions {
        query: Some(".a $".to_string()),
        ..RunOptions::default()
    };
    assert!(matches!(run(&opts), Err(CliError::Lex(_))));
}

#[test]
fn test_integer_past_i64_rejected() {
    let err = run(&options(".id", r#"{"id": 18446744073709551615}"#)).unwrap_err();
    assert!(matches!(err, CliError::NumberOutOfRange(_)));
    assert_eq!(
        err.to_string(),
        "Invalid JSON: number 18446744073709551615 is out of range"
    );
}

#[test]
fn test_deeply_nested_query_rejected() {
    let query = format!("{}.{}", "[".repeat(20_000), "]".repeat(20_000));
    let err = run(&options(&query, "1")).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
}
