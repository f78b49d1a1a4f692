//! writekit CLI — 语法检查、改写、查重、摘要与图像分析的命令行入口
//!
//! Usage:
//!   writekit grammar <text>                  Check grammar and spelling
//!   writekit paraphrase <style> <text>       Rewrite text in a style
//!   writekit plagiarism <text>               Review text for plagiarism
//!   writekit summarize [--title <t>] [file]  Summarize a transcript
//!   writekit describe <image> [prompt]       Analyze an image
//!   writekit chat                            Interactive chat session
//!   writekit models                          List known models

use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use serde::Serialize;
use writekit::features::{grammar, paraphrase, plagiarism, summarize, vision};
use writekit::gateway::models;
use writekit::types::{data_url_from_file, NormalizedResult};
use writekit::{ChatSession, ModelGateway};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "models" => cmd_models(),
        "version" | "--version" | "-V" => println!("writekit {}", env!("CARGO_PKG_VERSION")),
        "help" | "--help" | "-h" => print_usage(),
        command => {
            let gateway = match ModelGateway::from_env() {
                Ok(gateway) => gateway,
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::exit(2);
                }
            };
            let code = run_command(&gateway, command, &args[2..]).await;
            std::process::exit(code);
        }
    }
}

fn print_usage() {
    println!(
        r#"writekit — AI 写作助手命令行工具

USAGE:
    writekit <COMMAND> [ARGS]

COMMANDS:
    grammar <text>                  Check grammar; reads stdin when no text is given
    paraphrase <style> <text>       Rewrite text (Fluency, Humanize, Formal, Academic, Simple, Creative, Shorten)
    plagiarism <text>               Review text for plagiarism and AI patterns
    summarize [--title <t>] [file]  Summarize a transcript from a file or stdin
    describe <image> [prompt]       Analyze an image (https URL or local file)
    chat                            Interactive chat session (/clear resets, empty line exits)
    models                          List known models
    version                         Show version information
    help                            Show this help message

ENVIRONMENT:
    GROQ_API_KEY                    Groq API key (required for all but models/help)
    WRITEKIT_HTTP_TIMEOUT_SECS      HTTP timeout override, default 120"#
    );
}

fn cmd_models() {
    for (id, description) in models::CATALOG {
        println!("{id:<50} {description}");
    }
}

async fn run_command(gateway: &ModelGateway, command: &str, args: &[String]) -> i32 {
    match command {
        "grammar" => {
            let text = match text_from_args_or_stdin(args) {
                Ok(text) => text,
                Err(code) => return code,
            };
            print_result(&grammar::check_grammar(gateway, &text).await)
        }
        "paraphrase" => {
            let Some(style_arg) = args.first() else {
                eprintln!("Usage: writekit paraphrase <style> <text>");
                return 1;
            };
            let style = match style_arg.parse::<paraphrase::ParaphraseStyle>() {
                Ok(style) => style,
                Err(err) => {
                    eprintln!("Error: {err}");
                    return 1;
                }
            };
            let text = match text_from_args_or_stdin(&args[1..]) {
                Ok(text) => text,
                Err(code) => return code,
            };
            print_result(&paraphrase::paraphrase(gateway, &text, style).await)
        }
        "plagiarism" => {
            let text = match text_from_args_or_stdin(args) {
                Ok(text) => text,
                Err(code) => return code,
            };
            print_result(&plagiarism::check_plagiarism(gateway, &text).await)
        }
        "summarize" => cmd_summarize(gateway, args).await,
        "describe" => cmd_describe(gateway, args).await,
        "chat" => cmd_chat(gateway).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            1
        }
    }
}

async fn cmd_summarize(gateway: &ModelGateway, args: &[String]) -> i32 {
    let mut title: Option<String> = None;
    let mut file: Option<&String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--title" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("--title requires a value");
                    return 1;
                };
                title = Some(value.clone());
                i += 2;
            }
            _ => {
                file = Some(&args[i]);
                i += 1;
            }
        }
    }

    let transcript = match file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Cannot read {path}: {err}");
                return 1;
            }
        },
        None => match read_stdin() {
            Ok(text) => text,
            Err(code) => return code,
        },
    };

    print_result(&summarize::summarize_transcript(gateway, &transcript, title.as_deref()).await)
}

async fn cmd_describe(gateway: &ModelGateway, args: &[String]) -> i32 {
    let Some(image) = args.first() else {
        eprintln!("Usage: writekit describe <image> [prompt]");
        return 1;
    };

    // A local file becomes a base64 data URL; anything else is passed through.
    let image_url = if Path::new(image).exists() {
        match data_url_from_file(image) {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Error: {err}");
                return 1;
            }
        }
    } else {
        image.clone()
    };

    let prompt = args.get(1).map(String::as_str);
    print_result(&vision::analyze_image(gateway, &image_url, prompt).await)
}

async fn cmd_chat(gateway: &ModelGateway) -> i32 {
    let mut session = ChatSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return 1;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("Error: {err}");
                return 1;
            }
            None => return 0,
        };
        let line = line.trim();
        if line.is_empty() {
            return 0;
        }
        if line == "/clear" {
            session.clear();
            println!("(history cleared)");
            continue;
        }

        match session.send(gateway, line).await {
            NormalizedResult::Report(reply) => println!("{}", reply.response),
            NormalizedResult::Failed { error } => eprintln!("Error: {error}"),
        }
    }
}

fn text_from_args_or_stdin(args: &[String]) -> Result<String, i32> {
    if args.is_empty() {
        read_stdin()
    } else {
        Ok(args.join(" "))
    }
}

fn read_stdin() -> Result<String, i32> {
    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        eprintln!("Cannot read stdin: {err}");
        return Err(1);
    }
    let text = text.trim().to_string();
    if text.is_empty() {
        eprintln!("No input text given");
        return Err(1);
    }
    Ok(text)
}

fn print_result<T: Serialize>(result: &NormalizedResult<T>) -> i32 {
    match serde_json::to_string_pretty(result) {
        Ok(rendered) => {
            println!("{rendered}");
            i32::from(result.is_failed())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}
