use super::*;

fn nest(depth: u32) -> u32 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn shallow_call_returns_value() {
    assert_eq!(ensure_sufficient_stack(|| "begin"), "begin");
}

#[test]
fn deep_nesting_does_not_overflow() {
    // Roughly the recursion produced by 100k nested parentheses.
    assert_eq!(nest(100_000), 100_000);
}

#[test]
fn propagates_result() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("unterminated".to_string()));
    assert_eq!(result, Err("unterminated".to_string()));
}
