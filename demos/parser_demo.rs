use c4_dsl_validator::parser::{Section, parse_statement};

fn main() {
    println!("=== Statement Parser Demo ===");

    let test_lines = [
        (Section::None, r#"workspace "Big Bank plc" {"#),
        (Section::Model, r#"customer = person "Customer" "Browser""#),
        (Section::Model, r#"bank = softwareSystem "Bank" "Java" "Internal" {"#),
        (Section::Model, "x = person"),
        (Section::Model, r#"customer -> bank "Uses""#),
        (Section::Views, r#"systemContext bank "Context" {"#),
        (Section::Views, "styles {"),
        (Section::Views, "autoLayout"),
    ];

    for (section, line) in test_lines {
        println!("\nInput ({:?}): '{}'", section, line);
        let result = parse_statement(line, section);
        println!("Parsed: {:?}", result);
    }
}
