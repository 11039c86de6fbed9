//! # 交互式菜单
//!
//! 单线程阻塞的读-执行循环。每轮清屏重绘，读取一行输入，
//! 首字符（不区分大小写）选择命令：
//! - `T` 切换转换方向
//! - `S` 设置输入/输出目录（空输入保留原值）
//! - `R` 同步执行批量转换，之后等待回车
//! - `Q` 退出
//!
//! 其它输入不做任何事。输入结束（EOF）时退出循环。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `menu/render.rs`, `models/`
//! - 使用 `console` 清屏

pub mod render;

use crate::error::Result;
use crate::models::Config;

use console::Term;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// 菜单命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle,
    SetFolders,
    Run,
    Quit,
    /// 空行或无法识别的输入
    Noop,
}

impl MenuCommand {
    /// 按首字符解析命令
    pub fn parse(line: &str) -> Self {
        match line.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('T') => MenuCommand::Toggle,
            Some('S') => MenuCommand::SetFolders,
            Some('R') => MenuCommand::Run,
            Some('Q') => MenuCommand::Quit,
            _ => MenuCommand::Noop,
        }
    }
}

/// 菜单输出目标
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn write(&mut self, text: &str) -> io::Result<()>;
}

impl Screen for Term {
    fn clear(&mut self) -> io::Result<()> {
        self.clear_screen()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.flush()
    }
}

/// 读取一行，去掉行尾换行；EOF 时返回 None
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// 提示并读取一个目录；空输入返回 None
fn prompt_path<R: BufRead, S: Screen>(
    input: &mut R,
    screen: &mut S,
    prompt: &str,
) -> io::Result<Option<PathBuf>> {
    screen.write(prompt)?;
    Ok(read_line(input)?
        .filter(|line| !line.is_empty())
        .map(PathBuf::from))
}

/// 运行菜单循环
///
/// `run_batch` 在选择 `R` 时以当前配置的副本同步调用。
pub fn run_loop<R, S, F>(
    config: &mut Config,
    input: &mut R,
    screen: &mut S,
    mut run_batch: F,
) -> Result<()>
where
    R: BufRead,
    S: Screen,
    F: FnMut(Config),
{
    loop {
        screen.clear()?;
        screen.write(&render::render(config))?;

        let Some(line) = read_line(input)? else {
            tracing::debug!("stdin closed, leaving menu");
            return Ok(());
        };

        match MenuCommand::parse(&line) {
            MenuCommand::Quit => return Ok(()),
            MenuCommand::Toggle => config.mode = config.mode.toggle(),
            MenuCommand::SetFolders => {
                if let Some(path) = prompt_path(input, screen, "Enter Input Folder path: ")? {
                    config.input = path;
                }
                if let Some(path) = prompt_path(input, screen, "Enter Output Folder path: ")? {
                    config.output = path;
                }
            }
            MenuCommand::Run => {
                run_batch(config.clone());
                screen.write("\nPress Enter to continue...")?;
                if read_line(input)?.is_none() {
                    return Ok(());
                }
            }
            MenuCommand::Noop => {}
        }
    }
}

/// 在真实终端上运行菜单
pub fn run<F: FnMut(Config)>(mut config: Config, run_batch: F) -> Result<()> {
    let mut term = Term::stdout();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_loop(&mut config, &mut input, &mut term, run_batch)
}
