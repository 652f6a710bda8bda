//! Example: parse pasted quiz text, validate it and print a preview.
//!
//! Run with: `cargo run --example parse_quiz`
//!
//! The `tracing-subscriber` setup prints the parser's debug logs.

use std::sync::Arc;

use quiz_text::{validate_quiz, FnEventHandler, ParseEvent, ParserConfig, QuizParser};

const RAW: &str = "\
Lista de exercícios - Geografia

1. Qual é a capital do Brasil?
A) Rio de Janeiro
B) São Paulo
C) Brasília
D) Salvador

2 - Considere as afirmações:
I. O Amazonas é o maior rio do Brasil em volume.
|| - O Brasil faz fronteira com o Chile.
Quais estão corretas?
a) Apenas I *
b) Apenas II
c) I e II

3) O Brasil é o maior país da América do Sul.
a) Verdadeiro
b) Falso
c) Não sei
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = ParserConfig::default()
        .with_title("Geografia do Brasil")
        .with_category("Geografia")
        .with_answer_key("1-C, 3-A")
        .with_event_handler(Arc::new(FnEventHandler(|event: ParseEvent| {
            println!("[event] {:?}", event);
        })));

    let parser = QuizParser::new(config)?;
    let (quiz, diagnostics) = parser.parse_with_diagnostics(RAW);

    println!();
    print!("{}", quiz);
    println!();
    println!("diagnostics: {:?}", diagnostics);

    let validation = validate_quiz(&quiz);
    if validation.is_valid {
        println!("\n{}", quiz.to_json_pretty()?);
    } else {
        for error in &validation.errors {
            eprintln!("error: {}", error);
        }
    }

    Ok(())
}
