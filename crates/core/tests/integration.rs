use classwind_core::{cn, combine, combine_tokens, merge, Token};
use pretty_assertions::assert_eq;

#[test]
fn test_end_to_end_with_json_tokens() {
    // JS 侧传来的 token 数组：string | null | false | ""
    let json = r#"["btn", null, "active", false, ""]"#;

    let tokens: Vec<Token> = serde_json::from_str(json).expect("Failed to parse tokens");
    assert_eq!(tokens.len(), 5);

    let result = combine_tokens(&tokens);
    assert_eq!(result, "btn active");
}

#[test]
fn test_combination_table() {
    assert_eq!(combine(["btn", "btn-primary"]), "btn btn-primary");
    assert_eq!(combine([Some("btn"), None, Some("active")]), "btn active");
    assert_eq!(
        combine_tokens(&[
            Token::text("btn"),
            Token::Flag(false),
            Token::Absent,
            Token::text(""),
        ]),
        "btn"
    );
    assert_eq!(combine_tokens(&[]), "");
    assert_eq!(
        combine_tokens(&[Token::Flag(false), Token::Absent, Token::Absent]),
        ""
    );
}

#[test]
fn test_filtering_equivalence() {
    // 混入 falsy token 的结果 == 事先移除 falsy token 的结果
    let mixed = vec![
        Token::text("card"),
        Token::Absent,
        Token::text("card-wide"),
        Token::Flag(false),
        Token::text(""),
        Token::text("shadow"),
    ];
    let filtered: Vec<Token> = mixed.iter().filter(|t| t.is_truthy()).cloned().collect();

    assert_eq!(combine_tokens(&mixed), combine_tokens(&filtered));
    assert_eq!(combine_tokens(&mixed), "card card-wide shadow");
}

#[test]
fn test_macro_and_function_agree() {
    let is_active = true;
    let is_disabled = false;

    let via_macro = cn!(
        "btn",
        is_active.then_some("btn-active"),
        is_disabled.then_some("btn-disabled"),
    );
    let via_fn = combine([Some("btn"), Some("btn-active"), None]);

    assert_eq!(via_macro, via_fn);
    assert_eq!(via_macro, "btn btn-active");
}

#[test]
fn test_merge_on_top_of_combine() {
    let combined = combine(["btn btn-primary", "btn", "active"]);
    assert_eq!(combined, "btn btn-primary btn active");

    let merged = merge(["btn btn-primary", "btn", "active"]);
    assert_eq!(merged, "btn btn-primary active");
}
