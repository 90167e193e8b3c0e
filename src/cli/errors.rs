use std::process::ExitCode;

use downlevel::Error;

/// Exit status for mistakes in how the command was invoked.
const USAGE_EXIT: u8 = 2;

/// Render `err` for a terminal user.
pub fn render(err: &Error) -> String {
    let mut text = format!("error[{}]: {}", err.code(), err);

    if let Error::Transform(e) = err {
        if let Some(loc) = e.loc {
            text.push_str(&format!("\n  at line {}, column {}", loc.line, loc.column));
        }
        if let Some(snippet) = &e.snippet {
            text.push('\n');
            text.push_str(snippet.trim_end());
        }
    }

    if err.is_usage() {
        text.push_str("\nRun `downlevel --help` for usage.");
    }
    text
}

/// Print `err` on stderr and choose the process exit status.
pub fn report(err: &Error) -> ExitCode {
    eprintln!("{}", render(err));
    if err.is_usage() {
        ExitCode::from(USAGE_EXIT)
    } else {
        ExitCode::FAILURE
    }
}
