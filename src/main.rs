use clap::Parser;
use rustyline::{Editor, error::ReadlineError, history::DefaultHistory};

/// numeval is an easy to use arithmetic expression evaluator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and print its result instead of starting
    /// the interactive shell.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match numeval::run(expression.trim()) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = shell() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive shell until `exit` or end of input.
///
/// Each line is trimmed and fed through the pipeline; the result or the
/// error message is printed, and the loop moves on to the next line either
/// way.
fn shell() -> rustyline::Result<()> {
    let mut editor: Editor<(), DefaultHistory> = Editor::new()?;

    loop {
        match editor.readline("numeval > ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());

                let text = line.trim();
                if text == "exit" {
                    break;
                }
                if text.is_empty() {
                    continue;
                }

                match numeval::run(text) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
