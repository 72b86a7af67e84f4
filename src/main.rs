use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use trispell::{AsciiStringStrategy, MisspellingGeneratorBuilder, Result, SpellChecker};

/// Trie-based spell checker
#[derive(Parser, Debug)]
#[command(name = "trispell")]
#[command(about = "Trie-based spelling correction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct TrispellArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a dictionary and check words interactively
    Check(CheckArgs),
    /// Write a batch of randomly misspelled dictionary words
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Dictionary file, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Dictionary file, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Output file for the misspelled words
    #[arg(short, long, default_value = "wordsgenerated.txt")]
    output: PathBuf,

    /// How many words to generate
    #[arg(short, long, default_value_t = 50)]
    count: usize,
}

fn main() {
    let args = TrispellArgs::parse();

    let result = match args.command {
        Command::Check(check) => run_check(check),
        Command::Generate(generate) => run_generate(generate),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    println!("Welcome to the spell checker.");

    let mut checker: SpellChecker<AsciiStringStrategy> = SpellChecker::new();
    let start = Instant::now();
    let loaded = checker.load_dictionary(&args.dictionary)?;
    println!(
        "{loaded} word(s) loaded into {} node(s) in {} millisecond(s).",
        checker.node_count(),
        start.elapsed().as_millis()
    );

    let stdin = io::stdin();
    loop {
        println!("Enter a word ('-1' to quit):");
        print!(" > ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "-1" {
            break;
        }
        if !is_valid_input(input) {
            println!("Invalid input! Please try again with a word containing only [a-z].");
            continue;
        }

        let start = Instant::now();
        let corrections = checker.correct(input);
        print_corrections(&corrections, start.elapsed().as_micros());
    }

    println!("Terminating...");
    Ok(())
}

fn is_valid_input(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

fn print_corrections(corrections: &BTreeSet<String>, elapsed_us: u128) {
    if corrections.is_empty() {
        println!("No Suggestions");
        return;
    }
    println!(
        "{} possible correction(s) found in {elapsed_us} microsecond(s).",
        corrections.len()
    );
    let suggestions: Vec<&str> = corrections.iter().map(String::as_str).collect();
    println!("Suggestion(s): {}", suggestions.join(" "));
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let words = read_word_list(&args.dictionary)?;
    let generator = MisspellingGeneratorBuilder::default()
        .count(args.count)
        .build()
        .expect("default chances are in range");

    let mut rng = rand::rng();
    let batch = generator.generate(&words, &mut rng);

    let mut out = File::create(&args.output)?;
    for word in &batch {
        writeln!(out, "{word}")?;
    }
    println!(
        "{} misspelled word(s) written to {}.",
        batch.len(),
        args.output.display()
    );
    Ok(())
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
