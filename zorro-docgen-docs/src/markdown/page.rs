//! Per-component Markdown page.
//!
//! Assembles the header, info table, schematics block, usage snippets and
//! link sections into a complete document.

use zorro_docgen_core::catalog::ComponentRecord;

use crate::markdown::{schematics, usage};

/// Date stamped into every generated page.
pub const LAST_UPDATED: &str = "2025-01-15";

/// Relative link from a component page back to the catalog index.
pub const INDEX_LINK: &str = "../46-ng-zorro-antd-組件清單與CLI指令.md";

/// Render the complete Markdown page for a component.
#[must_use]
pub fn render_page(record: &ComponentRecord) -> String {
    let docs_url = record.docs_url();
    let mut sections = Vec::new();

    // Header
    sections.push(format!("# {name} - {name}", name = record.name));
    sections.push(String::new());
    // Two trailing spaces force a Markdown line break inside the quote.
    sections.push(format!("> **組件分類**：{}  ", record.category.label()));
    sections.push(format!("> **最後更新**：{LAST_UPDATED}"));
    sections.push(String::new());

    // Info table
    sections.push("## 基本信息".to_string());
    sections.push(String::new());
    sections.push("| 項目 | 內容 |".to_string());
    sections.push("|------|------|".to_string());
    sections.push(format!(
        "| **{}** | `{}` |",
        record.import.label(),
        record.module
    ));
    sections.push(format!("| **官方文檔** | [{}]({docs_url}) |", record.name));
    sections.push(format!(
        "| **Schematics 命令** | {} |",
        schematics::summary(record.schematics)
    ));
    sections.push(String::new());

    sections.extend(schematics::render_block(record.schematics));
    sections.push(String::new());

    sections.push("## 使用方式".to_string());
    sections.push(String::new());
    sections.extend(usage::render_block(record));
    sections.push(String::new());

    sections.push("## 基本用法".to_string());
    sections.push(String::new());
    sections.push(format!(
        "請參考 [官方文檔]({docs_url}) 查看詳細用法和示例。"
    ));
    sections.push(String::new());

    sections.push("## 相關資源".to_string());
    sections.push(String::new());
    sections.push(format!("- [官方文檔]({docs_url})"));
    sections.push(format!("- [返回索引]({INDEX_LINK})"));
    sections.push(String::new());

    sections.join("\n")
}
