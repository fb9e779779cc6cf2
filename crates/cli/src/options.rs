use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 走査モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ScanMode {
    /// 拡張子が一致するエントリを列挙 (既定: OBJs/ の *.obj)
    #[default]
    Files,
    /// D/D.<ext> を含むフォルダ D を列挙 (既定: FBXs の *.fbx)
    Models,
}
