//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::checker::Verdict;

/// Outcome of a single query word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// The query as it appeared in the input.
    pub original: String,
    /// Classification of its normalized form.
    pub verdict: Verdict,
}

/// Result structure for a full check run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub dictionary_words: usize,
    pub queries: Vec<QueryResult>,
    pub duration_ms: u64,
}

/// Result structure for dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub words: usize,
    pub nodes: usize,
    pub normalizer: String,
    pub duration_ms: u64,
}

/// Render one verdict as the classic checker line, preserving the
/// query's original casing:
///
/// - `<original> - ok`
/// - `<original> -> candidate`
/// - `<original> -> c1, c2, ...` (sorted)
/// - `<original> -?`
pub fn format_verdict(original: &str, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Exact => format!("{original} - ok"),
        Verdict::Unique(word) => format!("{original} -> {word}"),
        Verdict::Multiple(words) => format!("{original} -> {}", words.join(", ")),
        Verdict::Unknown => format!("{original} -?"),
    }
}

/// Output a serializable result as JSON.
pub fn output_json<T: Serialize>(result: &T, args: &OrthosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output the check report in the selected format.
///
/// Human format has already been streamed line by line while the queries
/// ran; only an optional verbose summary remains here.
pub fn output_check_report(report: &CheckReport, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!(
                    "checked {} queries against {} words in {}ms",
                    report.queries.len(),
                    report.dictionary_words,
                    report.duration_ms
                );
            }
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output the stats report in the selected format.
pub fn output_stats(stats: &DictionaryStats, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Dictionary statistics:");
            println!("  words: {}", stats.words);
            println!("  trie nodes: {}", stats.nodes);
            println!("  normalizer: {}", stats.normalizer);
            if args.verbosity() > 1 {
                println!("  load time: {}ms", stats.duration_ms);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_verdict_lines() {
        assert_eq!(format_verdict("dog", &Verdict::Exact), "dog - ok");
        assert_eq!(
            format_verdict("cot", &Verdict::Unique("cat".to_string())),
            "cot -> cat"
        );
        assert_eq!(
            format_verdict(
                "cot",
                &Verdict::Multiple(vec!["cat".to_string(), "cut".to_string()])
            ),
            "cot -> cat, cut"
        );
        assert_eq!(format_verdict("zzz", &Verdict::Unknown), "zzz -?");
    }

    #[test]
    fn test_format_preserves_original_casing() {
        assert_eq!(format_verdict("DoG", &Verdict::Exact), "DoG - ok");
        assert_eq!(
            format_verdict("CoT", &Verdict::Unique("cat".to_string())),
            "CoT -> cat"
        );
    }

    #[test]
    fn test_query_result_roundtrip() {
        let result = QueryResult {
            original: "CoT".to_string(),
            verdict: Verdict::Multiple(vec!["cat".to_string(), "cut".to_string()]),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: QueryResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.original, "CoT");
        assert_eq!(back.verdict, result.verdict);
    }
}
