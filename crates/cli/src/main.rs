use clap::Parser;
use std::process::ExitCode;
use stream_ops_cli::args::{Args, Command};
use stream_ops_cli::config::Config;
use stream_ops_cli::error::Result;
use stream_ops_cli::{presentation, report};
use stream_ops_engine::{
    Sentence, dedup_chars, longest_word, partition_by_parity, second_longest_word,
    word_frequencies, words_with_vowel_count,
};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Longest { sentence } => {
            let sentence = Sentence::parse(&sentence);
            presentation::print_word(longest_word(&sentence)?, config)
        }
        Command::Dedup { text } => presentation::print_dedup(&dedup_chars(&text), config),
        Command::SecondLongest { sentence } => {
            let sentence = Sentence::parse(&sentence);
            presentation::print_word(second_longest_word(&sentence)?, config)
        }
        Command::Frequency { sentence } => {
            let sentence = Sentence::parse(&sentence);
            presentation::print_frequencies(&word_frequencies(&sentence), config)
        }
        Command::Vowels { sentence, count } => {
            let sentence = Sentence::parse(&sentence);
            presentation::print_words(&words_with_vowel_count(&sentence, count), config)
        }
        Command::Parity { numbers } => {
            presentation::print_parity(&partition_by_parity(&numbers.0), config)
        }
        Command::Report {
            sentence,
            text,
            numbers,
            vowel_count,
        } => {
            let inputs = report::ReportInputs {
                sentence: &sentence,
                text: &text,
                numbers: &numbers.0,
                vowel_target: vowel_count,
            };
            presentation::print_report(&report::build(&inputs)?, config)
        }
    }
}
