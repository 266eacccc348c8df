// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;
use crate::config::DEFAULT_INPUT;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "passphrase_checker",
    version = crate::VERSION,
    about = "パスフレーズ検証ツール: 各行をパスフレーズとして検証し、有効な行数をポリシー別に集計します",
    after_help = "入力ファイルは1つだけ指定できます。複数の PATH を渡すと使用法エラー (終了コード 2) になります。"
)]
pub struct Args {
    /// 入力ファイル (1行に1パスフレーズ)。指定できるのは1つだけです
    #[arg(value_hint = ValueHint::FilePath, default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// ログ出力を詳細化 (-v: info, -vv: debug)。ログは stderr に出力されます
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
