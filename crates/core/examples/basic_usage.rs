/// 基本使用示例：展示如何组合条件 class 列表
///
/// 运行示例：
/// ```bash
/// cargo run --example basic_usage -p classwind-core
/// ```
use classwind_core::{cn, combine, combine_tokens, merge, Token};

fn main() {
    println!("=== classwind 基本使用示例 ===\n");

    // 1. 示例 1：组合纯文本 token
    println!("--- 示例 1: 纯文本 ---");
    let class = combine(["btn", "btn-primary"]);
    println!("combine([\"btn\", \"btn-primary\"]) = {:?}", class);

    // 2. 示例 2：条件 class（Option / bool 作为 token）
    println!("\n--- 示例 2: 条件 class ---");
    let is_active = true;
    let is_disabled = false;
    let class = cn!(
        "btn",
        is_active.then_some("btn-active"),
        is_disabled.then_some("btn-disabled"),
    );
    println!("cn! 结果 = {:?}", class);

    // 3. 示例 3：来自 JSON 的 token（wasm 边界的数据形态）
    println!("\n--- 示例 3: JSON token ---");
    let json = r#"["btn", null, "active", false, ""]"#;
    let tokens: Vec<Token> = serde_json::from_str(json).expect("Failed to parse tokens");
    let class = combine_tokens(&tokens);
    println!("输入 = {}", json);
    println!("输出 = {:?}", class);

    // 4. 示例 4：merge 按单个类名去重
    println!("\n--- 示例 4: merge 去重 ---");
    let class = merge(["btn btn-primary", "btn", "active"]);
    println!("merge 结果 = {:?}", class);
}
