use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use linematch_core::{best_match, read_line_lossy, CorpusTable, Document, VocabularyIndex};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "linematch")]
#[command(about = "Find the corpus line sharing the most words with a sentence", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read query sentences from stdin and print the best matching line for each
    Repl {
        /// Corpus file, one document per line
        #[arg(long)]
        corpus: String,
        /// Number of sentences to read (0 reads until end of input)
        #[arg(long, default_value_t = 5)]
        sentences: usize,
    },
    /// Answer a single query given on the command line
    Query {
        /// Corpus file, one document per line
        #[arg(long)]
        corpus: String,
        /// Query words
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print corpus and vocabulary sizes
    Stats {
        /// Corpus file, one document per line
        #[arg(long)]
        corpus: String,
        /// Also list the vocabulary in ascending order with ids
        #[arg(long, default_value_t = false)]
        words: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Repl { corpus, sentences } => {
            let (index, table) = load(&corpus)?;
            let stdin = io::stdin();
            repl(&index, &table, stdin.lock(), io::stdout().lock(), sentences)
        }
        Commands::Query { corpus, text } => {
            let (index, table) = load(&corpus)?;
            answer(&index, &table, &text.join(" "), &mut io::stdout().lock())
        }
        Commands::Stats { corpus, words } => {
            let (index, table) = load(&corpus)?;
            stats(&index, &table, words, &mut io::stdout().lock())
        }
    }
}

fn load(corpus: &str) -> Result<(VocabularyIndex, CorpusTable)> {
    let (index, table) = CorpusTable::from_path(corpus)?;
    if table.is_empty() {
        bail!("corpus {corpus} contains no lines");
    }
    tracing::info!(corpus, num_docs = table.len(), num_words = index.len(), "vocabulary built");
    Ok((index, table))
}

fn repl<R: BufRead, W: Write>(index: &VocabularyIndex, table: &CorpusTable, mut input: R, mut out: W, sentences: usize) -> Result<()> {
    let mut buf = Vec::new();
    let mut asked = 0usize;
    while sentences == 0 || asked < sentences {
        if sentences == 0 {
            write!(out, "enter sentence {asked}:")?;
        } else {
            write!(out, "enter sentence {asked}/{sentences}:")?;
        }
        out.flush()?;
        let Some(line) = read_line_lossy(&mut input, &mut buf)? else {
            writeln!(out)?;
            break;
        };
        answer(index, table, &line, &mut out)?;
        asked += 1;
    }
    Ok(())
}

fn answer<W: Write>(index: &VocabularyIndex, table: &CorpusTable, text: &str, out: &mut W) -> Result<()> {
    let query = Document::query(text, index);
    writeln!(out, "{query}")?;
    let m = best_match(&query, table)?;
    let line = table.line(m.index).unwrap_or_default();
    writeln!(out, "best matching train document: {} {} (score {})", m.index, line, m.score)?;
    Ok(())
}

fn stats<W: Write>(index: &VocabularyIndex, table: &CorpusTable, words: bool, out: &mut W) -> Result<()> {
    writeln!(out, "documents: {}", table.len())?;
    writeln!(out, "vocabulary: {}", index.len())?;
    if words {
        for (word, id) in index {
            writeln!(out, "{id}\t{word}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linematch_core::build_index_and_table;

    #[test]
    fn repl_answers_each_sentence() {
        let (index, table) = build_index_and_table(["the cat sat", "the dog sat", "a bird flew"]);
        let input = io::Cursor::new("the cat flew\nxyz qqq\nignored\n");
        let mut out = Vec::new();
        repl(&index, &table, input, &mut out, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("enter sentence 0/2:[0, 1, 6]"));
        assert!(text.contains("best matching train document: 0 the cat sat (score 2)"));
        assert!(text.contains("[]\nbest matching train document: 0 the cat sat (score 0)"));
        assert!(!text.contains("enter sentence 2/2"));
    }

    #[test]
    fn repl_survives_invalid_utf8_input() {
        let (index, table) = build_index_and_table(["the cat sat", "a bird flew"]);
        let input = io::Cursor::new(&b"caf\xe9 bird\nthe cat\n"[..]);
        let mut out = Vec::new();
        repl(&index, &table, input, &mut out, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("best matching train document: 1 a bird flew (score 1)"));
        assert!(text.contains("best matching train document: 0 the cat sat (score 2)"));
    }

    #[test]
    fn query_prints_document_and_best_line() {
        let (index, table) = build_index_and_table(["the cat sat", "the dog sat", "a bird flew"]);
        let mut out = Vec::new();
        answer(&index, &table, "Dog, sat", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "[2, 3]\nbest matching train document: 1 the dog sat (score 2)\n");
    }

    #[test]
    fn stats_lists_vocabulary_in_order() {
        let (index, table) = build_index_and_table(["the cat sat", "a bird"]);
        let mut out = Vec::new();
        stats(&index, &table, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "documents: 2\nvocabulary: 5\n3\ta\n4\tbird\n1\tcat\n2\tsat\n0\tthe\n");
    }

    #[test]
    fn empty_corpus_is_a_configuration_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load(&file.path().to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("contains no lines"));
        assert!(load("/no/such/corpus.txt").is_err());
    }

    #[test]
    fn repl_stops_at_end_of_input() {
        let (index, table) = build_index_and_table(["a bird flew"]);
        let mut out = Vec::new();
        repl(&index, &table, io::Cursor::new("bird\n"), &mut out, 0).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("best matching train document: 0 a bird flew (score 1)"));
        assert!(text.ends_with("enter sentence 1:\n"));
    }
}
