use std::env;
use std::error;
use std::fs::File;
use std::io::{self, stdin, BufRead, BufReader, Write};
use std::result;

use program::perror;

extern crate rcalc;
use rcalc::core::Interpreter;

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

/// Evaluates one raw line, reporting the value on stdout and any error on
/// stderr.
///
/// A bad line is not fatal: the session carries on with the next one. In a
/// script, syntax errors are tagged with the line they came from.
fn run(raw: Vec<u8>, line_number: Option<usize>, interpreter: &mut Interpreter) -> Result<()> {
    let line = match String::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => {
            match line_number {
                Some(n) => eprintln!("[line {}] error: {}", n, e.utf8_error()),
                None => eprintln!("error: {}", e.utf8_error()),
            }
            return Ok(());
        }
    };

    if line.trim().is_empty() {
        return Ok(());
    }

    match interpreter.run(&line) {
        Ok(value) => writeln!(io::stdout(), "{}", value)?,
        Err(e) => match line_number {
            Some(n) if e.is_syntax_error() => eprintln!("[line {}] {}", n, e),
            _ => eprintln!("{}", e),
        },
    }

    Ok(())
}

fn run_prompt() -> Result<()> {
    let stdin = stdin();
    let mut interpreter = Interpreter::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut buf = Vec::with_capacity(1024);
        if stdin.lock().read_until(b'\n', &mut buf)? == 0 {
            // EOF
            println!();
            return Ok(());
        }
        run(buf, None, &mut interpreter)?;
    }
}

fn run_file(f: &str) -> Result<()> {
    let file = File::open(f)?;
    let buf = BufReader::new(file);
    let mut interpreter = Interpreter::new();
    for (i, line) in buf.split(b'\n').enumerate() {
        run(line?, Some(i + 1), &mut interpreter)?;
    }
    Ok(())
}

fn fail_if_err(r: Result<()>) {
    if let Err(e) = r {
        perror(e)
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => fail_if_err(run_prompt()),
        2 => fail_if_err(run_file(&args[1])),
        _ => perror("usage: rcalc [script]".to_owned()),
    }
}
