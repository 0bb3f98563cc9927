// crates/cli/src/args.rs
use clap::{Parser, Subcommand};

use crate::options::OutputFormat;
use crate::parsers::NumberList;

/// `report` のデフォルト入力（参照実装の固定値）
pub const DEFAULT_SENTENCE: &str = "I am learning java stream in java";
pub const DEFAULT_TEXT: &str = "dabaafde";
pub const DEFAULT_NUMBERS: &str = "1,2,3,4,7,6,8";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "stream_ops",
    version = crate::VERSION,
    about = "文章と整数列の基本変換ツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 最も長い単語を求める（同長なら先頭優先）
    Longest {
        /// 対象の文章
        sentence: String,
    },

    /// 重複文字を除去する（初出順を保持）
    Dedup {
        /// 対象の文字列
        text: String,
    },

    /// 2番目に長い単語を求める（長さ降順の安定ソートの2番目）
    SecondLongest {
        /// 対象の文章
        sentence: String,
    },

    /// 単語ごとの出現回数を数える
    Frequency {
        /// 対象の文章
        sentence: String,
    },

    /// 母音数が一致する単語を抽出する
    Vowels {
        /// 対象の文章
        sentence: String,

        /// 母音数（大文字小文字を区別しない）
        #[arg(long, default_value_t = 2)]
        count: usize,
    },

    /// 整数列を偶数と奇数に分割する
    Parity {
        /// カンマ区切りの整数列 (例: 1,2,3)
        numbers: NumberList,
    },

    /// 6つの変換をまとめて順番に実行する
    Report {
        /// 単語系変換の入力文章
        #[arg(long, default_value = DEFAULT_SENTENCE)]
        sentence: String,

        /// 重複除去の入力文字列
        #[arg(long, default_value = DEFAULT_TEXT)]
        text: String,

        /// 偶奇分割の入力整数列
        #[arg(long, default_value = DEFAULT_NUMBERS)]
        numbers: NumberList,

        /// 母音フィルタの目標母音数
        #[arg(long, default_value_t = 2)]
        vowel_count: usize,
    },
}
