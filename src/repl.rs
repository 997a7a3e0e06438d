use std::io::{self, BufRead, Write};

use crate::{get_result, interpreter::registry::core::NAMES};

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before each line is read.
    pub prompt:  String,
    /// Print detailed error messages instead of the terse ones.
    pub explain: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt:  ">".to_string(),
               explain: false, }
    }
}

/// Reads lines from `input` and writes one result or error per line.
///
/// Blank lines are skipped. `help` lists the known identifiers. The loop ends
/// at end of input or on `exit`/`quit`; an evaluation error never ends it,
/// and neither does a line that is not valid UTF-8.
///
/// # Errors
/// Returns an error only if reading from `input` or writing to `output`
/// fails for a reason other than invalid UTF-8.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use calq::repl::{ReplConfig, run};
///
/// let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
/// let mut output = Vec::new();
/// run(Cursor::new("1 + 1\n(2\n"), &mut output, &config).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "2\ninvalid expression!\n");
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                log::debug!("end of input, leaving the prompt loop");
                break;
            },
            Ok(_) => {},
            // The bytes up to the newline are consumed, so the next read
            // starts on the following line.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::debug!("skipping a line that is not valid UTF-8");
                if config.explain {
                    writeln!(output, "Error: Input is not valid UTF-8.")?;
                } else {
                    writeln!(output, "invalid expression!")?;
                }
                continue;
            },
            Err(e) => return Err(e),
        }

        match line.trim() {
            "" => {},
            "exit" | "quit" => break,
            "help" => writeln!(output, "{}", NAMES.join(" "))?,
            expression => match get_result(expression) {
                Ok(result) => writeln!(output, "{result}")?,
                Err(e) if config.explain => writeln!(output, "{e:#}")?,
                Err(e) => writeln!(output, "{e}")?,
            },
        }
    }

    Ok(())
}
