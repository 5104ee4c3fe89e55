//! Usage snippets.
//!
//! Services are shown acquired through `inject()`. Modules are shown twice:
//! imported directly into a standalone component, and through the shared
//! `SHARED_IMPORTS` bundle.

use zorro_docgen_core::catalog::{ComponentRecord, ImportKind};

/// Import specifier of the shared aggregate bundle.
pub const SHARED_IMPORTS_PATH: &str = "@shared/shared-imports";

/// Renders the usage snippets for a record as lines.
#[must_use]
pub fn render_block(record: &ComponentRecord) -> Vec<String> {
    match record.import {
        ImportKind::Service => service_snippet(record),
        ImportKind::Module => module_snippets(record),
    }
}

fn service_snippet(record: &ComponentRecord) -> Vec<String> {
    vec![
        "### 使用服務".to_string(),
        String::new(),
        "```typescript".to_string(),
        "import { inject } from '@angular/core';".to_string(),
        record.import_statement(),
        String::new(),
        "@Component({".to_string(),
        "  selector: 'app-example',".to_string(),
        "  standalone: true,".to_string(),
        "  // ...".to_string(),
        "})".to_string(),
        "export class ExampleComponent {".to_string(),
        format!(
            "  private {} = inject({});",
            record.field_name(),
            record.module
        ),
        String::new(),
        "  // 使用服務方法".to_string(),
        "}".to_string(),
        "```".to_string(),
    ]
}

fn module_snippets(record: &ComponentRecord) -> Vec<String> {
    vec![
        "### 導入模組".to_string(),
        String::new(),
        "```typescript".to_string(),
        record.import_statement(),
        String::new(),
        "@Component({".to_string(),
        "  selector: 'app-example',".to_string(),
        "  standalone: true,".to_string(),
        format!("  imports: [{}],", record.module),
        "  // ...".to_string(),
        "})".to_string(),
        "export class ExampleComponent {}".to_string(),
        "```".to_string(),
        String::new(),
        "### 或使用 SHARED_IMPORTS".to_string(),
        String::new(),
        "```typescript".to_string(),
        format!("import {{ SHARED_IMPORTS }} from '{SHARED_IMPORTS_PATH}';"),
        String::new(),
        "@Component({".to_string(),
        "  selector: 'app-example',".to_string(),
        "  standalone: true,".to_string(),
        "  imports: [SHARED_IMPORTS], // 包含所有 ng-zorro-antd 組件".to_string(),
        "  // ...".to_string(),
        "})".to_string(),
        "export class ExampleComponent {}".to_string(),
        "```".to_string(),
    ]
}
