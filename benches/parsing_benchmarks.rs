use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use c4_dsl_validator::parser::{Section, parse_statement, statements, tokenize_statement};

/// Generate a model section with `elements` declarations and as many relationships
fn generate_model(elements: usize) -> String {
    let mut content = String::from("workspace \"Bench\" {\n    model {\n");

    for i in 0..elements {
        match i % 3 {
            0 => content.push_str(&format!("        user{} = person \"User {}\" \"Browser\"\n", i, i)),
            1 => content.push_str(&format!(
                "        system{} = softwareSystem \"System {}\" \"Rust\" \"Internal\"\n",
                i, i
            )),
            _ => content.push_str(&format!("        app{} = container \"App {}\" \"Axum\"\n", i, i)),
        }
    }
    for i in 1..elements {
        content.push_str(&format!(
            "        e{} -> e{} \"Calls {}\" # hop {}\n",
            i - 1,
            i,
            i,
            i
        ));
    }

    content.push_str("    }\n}\n");
    content
}

/// Benchmark parsing single statements of each kind
fn bench_single_statement_parsing(c: &mut Criterion) {
    let statements = vec![
        ("person", r#"customer = person "Personal Banking Customer" "Browser""#),
        (
            "software_system",
            r#"banking = softwareSystem "Internet Banking" "Java" "Internal" {"#,
        ),
        ("container", r#"webapp = container "Web Application" "Spring MVC""#),
        ("relationship", r#"customer -> banking.webapp "Uses" "HTTPS""#),
        ("malformed", "x = person"),
    ];

    let mut group = c.benchmark_group("single_statement_parsing");

    for (name, statement) in statements {
        group.bench_with_input(BenchmarkId::new("statement", name), statement, |b, statement| {
            b.iter(|| black_box(parse_statement(black_box(statement), Section::Model)))
        });
    }

    group.finish();
}

/// Benchmark tokenizing whole documents
fn bench_document_tokenizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_tokenizing");

    for &size in &[100, 1_000, 10_000] {
        let content = generate_model(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), &content, |b, content| {
            b.iter(|| {
                let tokens: usize = statements(black_box(content))
                    .map(|statement| tokenize_statement(statement.text).len())
                    .sum();
                black_box(tokens)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_statement_parsing, bench_document_tokenizing);
criterion_main!(benches);
