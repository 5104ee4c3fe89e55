//! Schematics command block.
//!
//! Tree and form components ship `ng g` schematics; every other page gets a
//! fixed notice instead of a command list.

use zorro_docgen_core::catalog::{PACKAGE_NAME, Schematics};

/// One `ng g` schematic with the comment rendered above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchematicCommand {
    /// Schematic name, e.g. `tree-basic`.
    pub name: &'static str,
    /// Short description rendered as a shell comment.
    pub description: &'static str,
}

const fn cmd(name: &'static str, description: &'static str) -> SchematicCommand {
    SchematicCommand { name, description }
}

/// Tree schematics, in rendering order.
pub const TREE_COMMANDS: &[SchematicCommand] = &[
    cmd("tree-basic", "基本樹形控件"),
    cmd("tree-basic-controlled", "受控樹形控件"),
    cmd("tree-draggable", "可拖拽樹形控件"),
    cmd("tree-draggable-confirm", "帶確認的可拖拽樹形控件"),
    cmd("tree-dynamic", "動態加載數據的樹形控件"),
    cmd("tree-search", "可搜索的樹形控件"),
    cmd("tree-customized-icon", "自定義圖標的樹形控件"),
    cmd("tree-line", "帶連接線的樹形控件"),
    cmd("tree-directory", "目錄樹形控件"),
    cmd("tree-virtual-scroll", "虛擬滾動樹形控件"),
];

/// Form schematics, in rendering order.
pub const FORM_COMMANDS: &[SchematicCommand] = &[
    cmd("form-normal-login", "標準登入表單"),
    cmd("form-normal-register", "標準註冊表單"),
    cmd("form-normal-validation", "標準表單驗證"),
    cmd("form-advanced-search", "高級搜索表單"),
    cmd("form-dynamic-form", "動態表單"),
    cmd("form-dynamic-form-item", "動態表單項目"),
    cmd("form-dynamic-form-rule", "動態表單規則"),
];

/// Rendered in place of a command list.
pub const NO_SCHEMATICS_NOTICE: &str = "暫無專用 schematics";

/// Rendered in the info table when a command list follows.
pub const SEE_COMMANDS_BELOW: &str = "詳見下方命令列表";

/// Returns the command table for a schematics kind.
#[must_use]
pub const fn commands(kind: Schematics) -> &'static [SchematicCommand] {
    match kind {
        Schematics::None => &[],
        Schematics::Tree => TREE_COMMANDS,
        Schematics::Form => FORM_COMMANDS,
    }
}

/// Summary cell for the info table.
#[must_use]
pub const fn summary(kind: Schematics) -> &'static str {
    if kind.has_commands() {
        SEE_COMMANDS_BELOW
    } else {
        NO_SCHEMATICS_NOTICE
    }
}

/// Renders the `## Schematics 命令` section as lines.
#[must_use]
pub fn render_block(kind: Schematics) -> Vec<String> {
    let mut lines = vec!["## Schematics 命令".to_string(), String::new()];

    let commands = commands(kind);
    if commands.is_empty() {
        lines.push(NO_SCHEMATICS_NOTICE.to_string());
        return lines;
    }

    lines.push("```bash".to_string());
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("# {}", command.description));
        lines.push(command_line(command));
    }
    lines.push("```".to_string());
    lines
}

/// `ng g ng-zorro-antd:<name> <name>`
#[must_use]
pub fn command_line(command: &SchematicCommand) -> String {
    format!("ng g {PACKAGE_NAME}:{} <name>", command.name)
}
