use crate::options::ScanMode;
use crate::parsers::parse_extension;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "objlist",
    version = crate::VERSION,
    about = "ディレクトリ内のモデルファイル名を JSON 配列で出力"
)]
pub struct Args {
    /// 対象ディレクトリ (既定: files は OBJs/, models は FBXs)
    pub dir: Option<PathBuf>,

    /// 対象の拡張子 (大文字小文字を区別, 既定: files は obj, models は fbx)
    #[arg(long, value_parser = parse_extension)]
    pub ext: Option<String>,

    /// 走査モード
    #[arg(long, value_enum, default_value = "files")]
    pub mode: ScanMode,

    /// ソートせずディレクトリ読み出し順で出力 (既定はバイト順の昇順)
    #[arg(long)]
    pub unsorted: bool,

    /// インデント付き JSON
    #[arg(long)]
    pub pretty: bool,

    /// 標準出力の代わりにファイルへ書き出す (models の既定: <DIR>/modelList.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
