//! # 菜单画面渲染
//!
//! 纯函数：由当前配置生成整屏文本，不直接操作终端，便于测试。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 使用
//! - 使用 `models/config.rs`

use crate::models::{Config, Mode};

const RULE: &str = "=========================================";
const THIN_RULE: &str = "-----------------------------------------";

/// 模式开关框，当前方向标记为 `[ ON ]`
pub fn render_toggle(mode: Mode) -> String {
    let mut out = String::new();
    out.push_str("   _______________________ \n");
    out.push_str("  |                       |\n");
    for option in [Mode::ToObj, Mode::ToRrm] {
        let mark = if option == mode { "[ ON ]" } else { "[    ]" };
        out.push_str(&format!("  |  {}  {}   |\n", mark, option.label()));
    }
    out.push_str("  |_______________________|\n");
    out
}

/// 整屏内容（以提示符结尾）
pub fn render(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("          RRM CONVERTER TOOL             \n");
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str(&render_toggle(config.mode));
    out.push('\n');

    out.push_str(&format!("  Input Folder:  {}\n", config.input.display()));
    out.push_str(&format!("  Output Folder: {}\n", config.output.display()));
    out.push('\n');

    out.push_str(RULE);
    out.push('\n');
    out.push_str(" [T]oggle Mode\n");
    out.push_str(" [S]et Folders\n");
    out.push_str(" [R]un Conversion\n");
    out.push_str(" [Q]uit\n");
    out.push_str(THIN_RULE);
    out.push('\n');
    out.push_str("> ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_toggle_marks_active_mode() {
        let to_obj = render_toggle(Mode::ToObj);
        assert!(to_obj.contains("[ ON ]  RRM -> OBJ"));
        assert!(to_obj.contains("[    ]  OBJ -> RRM"));

        let to_rrm = render_toggle(Mode::ToRrm);
        assert!(to_rrm.contains("[    ]  RRM -> OBJ"));
        assert!(to_rrm.contains("[ ON ]  OBJ -> RRM"));
    }

    #[test]
    fn test_toggle_box_lines_are_aligned() {
        let rendered = render_toggle(Mode::ToRrm);
        let widths: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_screen_shows_folders_and_commands() {
        let config = Config {
            input: PathBuf::from("meshes/in"),
            output: PathBuf::from("meshes/out"),
            ..Config::default()
        };
        let screen = render(&config);

        assert!(screen.contains("RRM CONVERTER TOOL"));
        assert!(screen.contains("  Input Folder:  meshes/in\n"));
        assert!(screen.contains("  Output Folder: meshes/out\n"));
        for item in ["[T]oggle Mode", "[S]et Folders", "[R]un Conversion", "[Q]uit"] {
            assert!(screen.contains(item), "missing menu item {}", item);
        }
        assert!(screen.ends_with("> "));
    }
}
