pub mod checkbox;
pub mod page;
pub mod wait;

use serde_json::Value;

/// Splice JSON-encoded arguments into an injected function literal:
/// `(fn)(arg0, arg1, ...)`.
pub fn build_js_call(func: &str, args: &[Value]) -> String {
    let args_str = args.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})({})", func, args_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_are_json_encoded() {
        let js = build_js_call("(a, b) => a + b", &[json!("x\"y"), json!(2)]);
        assert_eq!(js, r#"((a, b) => a + b)("x\"y", 2)"#);
    }

    #[test]
    fn no_args_is_a_bare_call() {
        assert_eq!(build_js_call("() => 1", &[]), "(() => 1)()");
    }
}
