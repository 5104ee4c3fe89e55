//! Component record schema.
//!
//! A [`ComponentRecord`] describes one documented ng-zorro-antd component:
//! the importable symbol, the URL segment, its grouping, and which
//! schematics and usage variants its page carries.

use std::fmt;

use serde::Serialize;

/// Base URL of the official component documentation.
pub const DOCS_BASE_URL: &str = "https://ng.ant.design/components";

/// npm package the components are imported from.
pub const PACKAGE_NAME: &str = "ng-zorro-antd";

// ============================================================================
// Category
// ============================================================================

/// Grouping used to organize the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Alerts, dialogs, progress and message services.
    Feedback,
    /// Read-only presentation of data.
    DataDisplay,
    /// Form controls.
    DataEntry,
    /// Page structure.
    Layout,
    /// Buttons, icons, typography.
    General,
    /// Menus, tabs, pagination.
    Navigation,
    /// Utilities that fit nowhere else.
    Other,
    /// Components specific to this project.
    Special,
}

impl Category {
    /// Returns the label rendered into generated pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feedback => "反饋類組件 (Feedback)",
            Self::DataDisplay => "數據展示類組件 (Data Display)",
            Self::DataEntry => "數據錄入類組件 (Data Entry)",
            Self::Layout => "佈局類組件 (Layout)",
            Self::General => "通用類組件 (General)",
            Self::Navigation => "導航類組件 (Navigation)",
            Self::Other => "其他類組件 (Other)",
            Self::Special => "特色組件 (Special)",
        }
    }

    /// Returns all categories in catalog order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Feedback,
            Self::DataDisplay,
            Self::DataEntry,
            Self::Layout,
            Self::General,
            Self::Navigation,
            Self::Other,
            Self::Special,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feedback => write!(f, "feedback"),
            Self::DataDisplay => write!(f, "data-display"),
            Self::DataEntry => write!(f, "data-entry"),
            Self::Layout => write!(f, "layout"),
            Self::General => write!(f, "general"),
            Self::Navigation => write!(f, "navigation"),
            Self::Other => write!(f, "other"),
            Self::Special => write!(f, "special"),
        }
    }
}

// ============================================================================
// Schematics / Import Kind
// ============================================================================

/// Which fixed `ng g` command list a page embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schematics {
    /// No dedicated schematics; the page carries a fixed notice.
    #[default]
    None,
    /// The ten tree schematics.
    Tree,
    /// The seven form schematics.
    Form,
}

impl Schematics {
    /// Returns `true` if the page lists commands for this component.
    #[must_use]
    pub const fn has_commands(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How a component is brought into an Angular component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Added to a standalone component's `imports` list.
    #[default]
    Module,
    /// Acquired through `inject()`.
    Service,
}

impl ImportKind {
    /// Returns the import-type label rendered into generated pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Module => "模組導入",
            Self::Service => "服務導入",
        }
    }
}

// ============================================================================
// Component Record
// ============================================================================

/// One entry of the component catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    /// Display name, also used in the output file name.
    pub name: &'static str,

    /// Importable symbol (`NzAlertModule`, `NzMessageService`, ...).
    pub module: &'static str,

    /// URL segment for documentation links and import specifiers.
    pub path: &'static str,

    /// Grouping label.
    pub category: Category,

    /// 1-based ordinal; becomes the zero-padded file name prefix.
    pub index: u32,

    /// Embedded command list.
    pub schematics: Schematics,

    /// Usage snippet variant.
    pub import: ImportKind,
}

impl ComponentRecord {
    /// Creates a module-import record without schematics.
    #[must_use]
    pub const fn new(
        name: &'static str,
        module: &'static str,
        path: &'static str,
        category: Category,
        index: u32,
    ) -> Self {
        Self {
            name,
            module,
            path,
            category,
            index,
            schematics: Schematics::None,
            import: ImportKind::Module,
        }
    }

    /// Marks the record as an injectable service.
    #[must_use]
    pub const fn service(mut self) -> Self {
        self.import = ImportKind::Service;
        self
    }

    /// Attaches a schematics command list.
    #[must_use]
    pub const fn with_schematics(mut self, schematics: Schematics) -> Self {
        self.schematics = schematics;
        self
    }

    /// Returns `true` for service records.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self.import, ImportKind::Service)
    }

    /// Output file name: `{index:02}-{name}.md`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{:02}-{}.md", self.index, self.name)
    }

    /// Official documentation URL.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("{DOCS_BASE_URL}/{}/en", self.path)
    }

    /// TypeScript import statement for the module symbol.
    #[must_use]
    pub fn import_statement(&self) -> String {
        format!(
            "import {{ {} }} from '{PACKAGE_NAME}/{}';",
            self.module, self.path
        )
    }

    /// camelCase form of `path`, used as the injected field name.
    #[must_use]
    pub fn field_name(&self) -> String {
        let mut out = String::with_capacity(self.path.len());
        let mut upper = false;
        for ch in self.path.chars() {
            if ch == '-' {
                upper = true;
            } else if upper {
                out.push(ch.to_ascii_uppercase());
                upper = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}
