//! Command implementations for the orthos CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{OrthosError, Result};
use crate::spelling::checker::SpellChecker;

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => run_check(check_args.clone(), &args),
        Command::Stats(stats_args) => run_stats(stats_args.clone(), &args),
    }
}

/// Open the input source: a file when given, standard input otherwise.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Load every non-blank line of `path` into the checker as a dictionary
/// word.
fn load_dictionary(checker: &mut SpellChecker, path: &Path) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            checker.insert(word);
        }
    }
    Ok(())
}

/// Parse the leading dictionary-size line of the count-prefixed input
/// protocol. A missing or non-numeric line is fatal.
fn parse_word_count(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<usize> {
    let line = lines
        .next()
        .ok_or_else(|| OrthosError::parse("missing dictionary size line"))??;
    line.trim()
        .parse::<usize>()
        .map_err(|_| OrthosError::parse(format!("invalid dictionary size: {:?}", line.trim())))
}

/// Check queries against a dictionary.
///
/// The dictionary-build phase completes entirely before the first query
/// runs; queries are answered in arrival order, and in human format each
/// answer is printed as soon as it is known.
fn run_check(args: CheckArgs, cli_args: &OrthosArgs) -> Result<()> {
    let started = Instant::now();
    let mut checker = SpellChecker::new();

    let reader = open_input(args.input.as_deref())?;
    let mut lines = reader.lines();

    let mut remaining = match &args.dictionary {
        Some(path) => {
            load_dictionary(&mut checker, path)?;
            0
        }
        None => parse_word_count(&mut lines)?,
    };

    let mut queries = Vec::new();
    for line in lines {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if remaining > 0 {
            checker.insert(word);
            remaining -= 1;
            continue;
        }
        let verdict = checker.check(word);
        if matches!(cli_args.output_format, OutputFormat::Human) {
            println!("{}", format_verdict(word, &verdict));
        }
        queries.push(QueryResult {
            original: word.to_string(),
            verdict,
        });
    }

    let report = CheckReport {
        dictionary_words: checker.word_count(),
        queries,
        duration_ms: started.elapsed().as_millis() as u64,
    };
    output_check_report(&report, cli_args)
}

/// Load a dictionary and report its statistics.
fn run_stats(args: StatsArgs, cli_args: &OrthosArgs) -> Result<()> {
    let started = Instant::now();
    let mut checker = SpellChecker::new();

    match &args.dictionary {
        Some(path) => load_dictionary(&mut checker, path)?,
        None => {
            let reader = open_input(args.input.as_deref())?;
            let mut lines = reader.lines();
            let mut remaining = parse_word_count(&mut lines)?;
            for line in lines {
                if remaining == 0 {
                    break;
                }
                let line = line?;
                let word = line.trim();
                if word.is_empty() {
                    continue;
                }
                checker.insert(word);
                remaining -= 1;
            }
        }
    }

    let stats = DictionaryStats {
        words: checker.word_count(),
        nodes: checker.trie().node_count(),
        normalizer: checker.normalizer_name().to_string(),
        duration_ms: started.elapsed().as_millis() as u64,
    };
    output_stats(&stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_word_count() {
        let input = "3\ncat\n";
        let mut lines = BufReader::new(input.as_bytes()).lines();
        assert_eq!(parse_word_count(&mut lines).unwrap(), 3);

        let input = "  42  \n";
        let mut lines = BufReader::new(input.as_bytes()).lines();
        assert_eq!(parse_word_count(&mut lines).unwrap(), 42);
    }

    #[test]
    fn test_parse_word_count_rejects_garbage() {
        let input = "many\ncat\n";
        let mut lines = BufReader::new(input.as_bytes()).lines();
        let err = parse_word_count(&mut lines).unwrap_err();
        assert!(err.to_string().contains("invalid dictionary size"));

        let input = "";
        let mut lines = BufReader::new(input.as_bytes()).lines();
        let err = parse_word_count(&mut lines).unwrap_err();
        assert!(err.to_string().contains("missing dictionary size"));
    }

    #[test]
    fn test_load_dictionary_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  dog  ").unwrap();
        writeln!(file, "form").unwrap();
        file.flush().unwrap();

        let mut checker = SpellChecker::new();
        load_dictionary(&mut checker, file.path()).unwrap();

        assert_eq!(checker.word_count(), 3);
        assert!(checker.contains("cat"));
        assert!(checker.contains("dog"));
        assert!(checker.contains("form"));
    }
}
