// crates/cli/src/presentation.rs
use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use crate::report::Report;
use stream_ops_engine::ParityGroups;

#[derive(Serialize)]
struct WordOutput<'a> {
    word: &'a str,
}

#[derive(Serialize)]
struct TextOutput<'a> {
    deduped: &'a str,
}

#[derive(Serialize)]
struct WordsOutput<'a> {
    words: &'a [&'a str],
}

#[derive(Serialize)]
struct FrequencyOutput<'a> {
    frequencies: BTreeMap<&'a str, usize>,
}

pub fn print_word(word: &str, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => println!("{word}"),
        OutputFormat::Json => print_json(&WordOutput { word })?,
        OutputFormat::Yaml => print_yaml(&WordOutput { word })?,
    }
    Ok(())
}

pub fn print_dedup(deduped: &str, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => println!("{deduped}"),
        OutputFormat::Json => print_json(&TextOutput { deduped })?,
        OutputFormat::Yaml => print_yaml(&TextOutput { deduped })?,
    }
    Ok(())
}

/// 単語リストは1行1単語で出力する（参照動作と同じ）。
pub fn print_words(words: &[&str], config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => {
            for word in words {
                println!("{word}");
            }
        }
        OutputFormat::Json => print_json(&WordsOutput { words })?,
        OutputFormat::Yaml => print_yaml(&WordsOutput { words })?,
    }
    Ok(())
}

pub fn print_frequencies(freq: &HashMap<String, usize>, config: &Config) -> Result<()> {
    // Map iteration order is unspecified; sort keys for stable output.
    let sorted: BTreeMap<&str, usize> = freq.iter().map(|(w, &c)| (w.as_str(), c)).collect();
    match config.format {
        OutputFormat::Table => {
            println!("    COUNT     WORD");
            println!("------------------");
            for (word, count) in &sorted {
                println!("{count:>9}     {word}");
            }
        }
        OutputFormat::Json => print_json(&FrequencyOutput { frequencies: sorted })?,
        OutputFormat::Yaml => print_yaml(&FrequencyOutput { frequencies: sorted })?,
    }
    Ok(())
}

pub fn print_parity(groups: &ParityGroups, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => {
            println!("evens: {}", join_numbers(&groups.evens));
            println!("odds:  {}", join_numbers(&groups.odds));
        }
        OutputFormat::Json => print_json(groups)?,
        OutputFormat::Yaml => print_yaml(groups)?,
    }
    Ok(())
}

pub fn print_report(report: &Report, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => print_report_table(report),
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Yaml => print_yaml(report)?,
    }
    Ok(())
}

fn print_report_table(report: &Report) {
    println!("stream_ops v{}", crate::VERSION);
    println!();
    println!("[1] longest word:        {}", report.longest);
    println!("[2] deduped:             {}", report.deduped);
    println!("[3] second longest word: {}", report.second_longest);
    println!("[4] word frequencies:");
    for (word, count) in &report.frequencies {
        println!("{count:>9}     {word}");
    }
    println!(
        "[5] words with {} vowels: {}",
        report.vowel_target,
        report.vowel_matches.join(" ")
    );
    println!("[6] evens: {}", join_numbers(&report.parity.evens));
    println!("    odds:  {}", join_numbers(&report.parity.odds));
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> Result<()> {
    print!("{}", serde_yaml::to_string(value)?);
    Ok(())
}
