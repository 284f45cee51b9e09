//! Reading the code to review.
//!
//! Code comes either from a file or from standard input, read to EOF.
//! It is never parsed or validated.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Prompt shown before reading code interactively.
pub const PROMPT: &str = "Please paste the code you want feedback on (finish with Ctrl-D):";

/// Code submitted for review.
#[derive(Debug, Clone)]
pub struct SubmittedCode {
    /// File path, or `stdin`.
    pub source: String,
    pub code: String,
}

impl SubmittedCode {
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Status line printed once the code has been read.
    pub fn acknowledgement(&self) -> &'static str {
        if self.is_blank() {
            "⚠️  You forgot to send the code"
        } else {
            "Great! Let's get to the feedback"
        }
    }
}

/// Read the code from `file`, or from standard input when `file` is `None`.
pub fn read_code(file: Option<&Path>) -> Result<SubmittedCode> {
    match file {
        Some(path) => read_file(path),
        None => {
            println!("{}", PROMPT);
            let stdin = std::io::stdin();
            let code = read_from(stdin.lock())?;
            Ok(SubmittedCode {
                source: "stdin".to_string(),
                code,
            })
        }
    }
}

fn read_file(path: &Path) -> Result<SubmittedCode> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read code from {}", path.display()))?;

    Ok(SubmittedCode {
        source: path.display().to_string(),
        code,
    })
}

/// Read everything from `reader`. No length limit.
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut code = String::new();
    reader
        .read_to_string(&mut code)
        .context("Failed to read code from standard input")?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_from_keeps_input_verbatim() {
        let input = "fn main() {\n    println!(\"hi\");\n}\n";
        let code = read_from(input.as_bytes()).unwrap();
        assert_eq!(code, input);
    }

    #[test]
    fn test_blank_input_is_acknowledged_with_warning() {
        let submitted = SubmittedCode {
            source: "stdin".into(),
            code: "  \n\t\n".into(),
        };
        assert!(submitted.is_blank());
        assert!(submitted.acknowledgement().contains("forgot"));

        let submitted = SubmittedCode {
            source: "stdin".into(),
            code: "x = 1".into(),
        };
        assert!(!submitted.is_blank());
        assert_eq!(submitted.acknowledgement(), "Great! Let's get to the feedback");
    }

    #[test]
    fn test_read_code_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<img src=\"logo.png\">\n<button></button>").unwrap();

        let submitted = read_code(Some(file.path())).unwrap();
        assert_eq!(submitted.line_count(), 2);
        assert!(submitted.code.contains("logo.png"));
        assert_eq!(submitted.source, file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_code(Some(Path::new("/definitely/not/here.py"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read code"));
    }
}
