use clap::Parser;
use iceoryx2_bb_log::{debug, set_log_level_from_env_or, LogLevel};
use stackcalc::{
    lang::tokenizing::{Token, Tokenizer},
    runtime::{
        error::{self, ScriptError},
        interpreter::virtual_machine::VirtualMachine,
    },
};
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    process::{ExitCode, Termination},
};

/// A small stack based calculator.  Run a script file, or start an interactive session when no
/// file is given.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Echo each line's tokens before executing them.
    #[arg(short, long)]
    debug: bool,

    /// Script to run instead of starting the REPL.
    file: Option<PathBuf>,
}

/// Print the tokens quoted and separated by spaces.
fn echo_tokens(tokens: &[Token]) {
    let quoted: Vec<String> = tokens.iter().map(|token| format!("'{}'", token)).collect();

    println!("{}", quoted.join(" "));
}

/// Print the stack bottom to top.
fn print_stack(vm: &VirtualMachine) {
    let values: Vec<String> = vm.stack_state().iter().map(i64::to_string).collect();

    println!("[{}]", values.join(", "));
}

/// List the vocabulary, one word per line.
fn print_words(vm: &VirtualMachine) {
    for info in vm.dictionary().words() {
        println!("{}", info);
    }
}

/// Prompt for the next line of input.  Returns None at the end of input.
fn prompt(prompt_string: &str) -> error::Result<Option<String>> {
    print!("{}", prompt_string);
    io::stdout().flush()?;

    let mut line = String::new();

    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

/// Run lines typed by the user until they enter exit or the input ends.  Faults in a line are
/// reported and the session carries on, anything else ends the session.
fn repl(vm: &mut VirtualMachine, tokenizer: &mut Tokenizer) -> error::Result<()> {
    println!("Basic Stack Calculator");
    println!("Use the exit command to quit the program.");

    while let Some(line) = prompt("> ")? {
        match line.trim() {
            "exit" => break,
            "words" => {
                print_words(vm);
                continue;
            }
            _ => {}
        }

        tokenizer.clear();
        tokenizer.process(&line, None);

        if vm.debug_enabled() {
            echo_tokens(tokenizer.tokens());
        }

        match vm.execute_tokens(tokenizer.tokens()) {
            Ok(()) => print_stack(vm),
            Err(error) if error.is_recoverable() => {
                debug!("Recovered from fault: {:?}", error);
                eprintln!("Error: {}", error);
            }
            Err(error) => return Err(error),
        }
    }

    Ok(())
}

/// Tokenize and execute a whole script file, then show the resulting stack.
fn run_file(
    vm: &mut VirtualMachine,
    tokenizer: &mut Tokenizer,
    path: &Path,
) -> error::Result<()> {
    let file = File::open(path).map_err(|err| {
        ScriptError::Io(format!("Could not read file {}: {}", path.display(), err))
    })?;
    let source = path.to_string_lossy();

    tokenizer.process_stream(BufReader::new(file), Some(source.as_ref()))?;

    if vm.debug_enabled() {
        echo_tokens(tokenizer.tokens());
    }

    vm.execute_tokens(tokenizer.tokens())?;
    print_stack(vm);

    Ok(())
}

fn main() -> ExitCode {
    set_log_level_from_env_or(LogLevel::Warn);

    let args = Args::parse();

    // One machine and one tokenizer for the whole session.
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();

    vm.set_debug_enabled(args.debug);

    let result = match &args.file {
        Some(path) => run_file(&mut vm, &mut tokenizer, path),
        None => repl(&mut vm, &mut tokenizer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => error.report(),
    }
}
