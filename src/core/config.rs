use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// The configuration file looked up in the current directory when no
/// `--config` argument is given.
pub const DEFAULT_CONFIG_FILE: &str = "Harness.toml";

/// Settings for the test discovery runner (`run`).
/// 测试发现运行器（`run`）的设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscoverConfig {
    /// The directory walked when no explicit artifact path is given.
    /// 未给出显式产物路径时遍历的目录。
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// File extensions (without the leading dot) that mark a file as a test
    /// artifact. When empty, platform executable detection is used instead.
    ///
    /// 将文件标记为测试产物的扩展名（不含前导点）。
    /// 为空时改用平台的可执行文件检测。
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: vec![],
        }
    }
}

/// Settings for the file-system operation sequence (`fs-oper`).
/// 文件系统操作序列（`fs-oper`）的设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FsOperConfig {
    /// The build tool command. It may carry extra arguments and environment
    /// references, e.g. `"make -s"` or `"$HOME/bin/gmake"`.
    ///
    /// 构建工具命令。可以包含额外参数和环境变量引用，
    /// 例如 `"make -s"` 或 `"$HOME/bin/gmake"`。
    #[serde(default = "default_make_command")]
    pub make_command: String,
    /// The target-description file passed to the build tool with `-f`.
    /// 通过 `-f` 传给构建工具的目标描述文件。
    #[serde(default = "default_makefile")]
    pub makefile: PathBuf,
    /// The reference listing compared against the output of `ls-tmp`.
    /// 与 `ls-tmp` 输出进行比较的参考列表文件。
    #[serde(default = "default_reference")]
    pub reference: PathBuf,
    /// The directory the build tool runs in; `tmp` and `tmp2` live here.
    /// 构建工具运行的目录；`tmp` 和 `tmp2` 位于此处。
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
}

impl Default for FsOperConfig {
    fn default() -> Self {
        Self {
            make_command: default_make_command(),
            makefile: default_makefile(),
            reference: default_reference(),
            work_dir: default_work_dir(),
        }
    }
}

/// Represents the whole harness configuration, loaded from a TOML file.
/// Every section is optional; missing values fall back to the defaults.
///
/// 代表从 TOML 文件加载的整个测试框架配置。
/// 每个部分都是可选的；缺失的值回退到默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// When absent, `--lang` or the system locale decides.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 缺失时由 `--lang` 或系统语言决定。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub discover: DiscoverConfig,

    #[serde(default)]
    pub fs_oper: FsOperConfig,
}

impl HarnessConfig {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path, locale: &str) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            t!("config.read_failed", locale = locale, path = path.display()).to_string()
        })?;
        toml::from_str(&content).with_context(|| {
            t!("config.parse_failed", locale = locale, path = path.display()).to_string()
        })
    }

    /// Loads the configuration for a command.
    ///
    /// An explicit path must exist. Without one, `Harness.toml` in the current
    /// directory is used when present, and the defaults otherwise.
    ///
    /// 为命令加载配置。显式给出的路径必须存在。
    /// 未给出时，如果当前目录存在 `Harness.toml` 则使用它，否则使用默认值。
    pub fn resolve(explicit: Option<&Path>, locale: &str) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::load(path, locale)?, Some(path.to_path_buf()))),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Ok((Self::load(path, locale)?, Some(path.to_path_buf())))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("tests")
}

fn default_make_command() -> String {
    "make".to_string()
}

fn default_makefile() -> PathBuf {
    PathBuf::from("test_fs_oper.mk")
}

fn default_reference() -> PathBuf {
    PathBuf::from("test_fs_oper.ref")
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(".")
}
