//! The built-in ng-zorro-antd component catalog.
//!
//! Order matters: generation walks this table front to back and the
//! `index` column fixes each page's file name prefix.

use super::schema::Category::{
    DataDisplay, DataEntry, Feedback, General, Layout, Navigation, Other, Special,
};
use super::schema::{ComponentRecord, Schematics};

/// Every documented component, in catalog order.
#[rustfmt::skip]
pub static COMPONENTS: &[ComponentRecord] = &[
    // ── Feedback ─────────────────────────────────────
    ComponentRecord::new("Alert", "NzAlertModule", "alert", Feedback, 1),
    ComponentRecord::new("Result", "NzResultModule", "result", Feedback, 2),
    ComponentRecord::new("Skeleton", "NzSkeletonModule", "skeleton", Feedback, 3),
    ComponentRecord::new("Spin", "NzSpinModule", "spin", Feedback, 4),
    ComponentRecord::new("Progress", "NzProgressModule", "progress", Feedback, 5),
    ComponentRecord::new("Drawer", "NzDrawerModule", "drawer", Feedback, 6),
    ComponentRecord::new("Modal", "NzModalModule", "modal", Feedback, 7),
    ComponentRecord::new("Popconfirm", "NzPopconfirmModule", "popconfirm", Feedback, 8),
    ComponentRecord::new("Message", "NzMessageService", "message", Feedback, 9).service(),
    ComponentRecord::new("Notification", "NzNotificationService", "notification", Feedback, 10).service(),

    // ── DataDisplay ─────────────────────────────────────
    ComponentRecord::new("Avatar", "NzAvatarModule", "avatar", DataDisplay, 11),
    ComponentRecord::new("Badge", "NzBadgeModule", "badge", DataDisplay, 12),
    ComponentRecord::new("Calendar", "NzCalendarModule", "calendar", DataDisplay, 13),
    ComponentRecord::new("Card", "NzCardModule", "card", DataDisplay, 14),
    ComponentRecord::new("Carousel", "NzCarouselModule", "carousel", DataDisplay, 15),
    ComponentRecord::new("Collapse", "NzCollapseModule", "collapse", DataDisplay, 16),
    ComponentRecord::new("Comment", "NzCommentModule", "comment", DataDisplay, 17),
    ComponentRecord::new("Descriptions", "NzDescriptionsModule", "descriptions", DataDisplay, 18),
    ComponentRecord::new("Empty", "NzEmptyModule", "empty", DataDisplay, 19),
    ComponentRecord::new("Image", "NzImageModule", "image", DataDisplay, 20),
    ComponentRecord::new("List", "NzListModule", "list", DataDisplay, 21),
    ComponentRecord::new("Popover", "NzPopoverModule", "popover", DataDisplay, 22),
    ComponentRecord::new("QRCode", "NzQRCodeModule", "qr-code", DataDisplay, 23),
    ComponentRecord::new("Segmented", "NzSegmentedModule", "segmented", DataDisplay, 24),
    ComponentRecord::new("Statistic", "NzStatisticModule", "statistic", DataDisplay, 25),
    ComponentRecord::new("Table", "NzTableModule", "table", DataDisplay, 26),
    ComponentRecord::new("Tag", "NzTagModule", "tag", DataDisplay, 27),
    ComponentRecord::new("Timeline", "NzTimelineModule", "timeline", DataDisplay, 28),
    ComponentRecord::new("Tooltip", "NzTooltipModule", "tooltip", DataDisplay, 29),
    ComponentRecord::new("Tree", "NzTreeModule", "tree", DataDisplay, 30).with_schematics(Schematics::Tree),
    ComponentRecord::new("TreeView", "NzTreeViewModule", "tree-view", DataDisplay, 31),

    // ── DataEntry ─────────────────────────────────────
    ComponentRecord::new("AutoComplete", "NzAutocompleteModule", "auto-complete", DataEntry, 32),
    ComponentRecord::new("Cascader", "NzCascaderModule", "cascader", DataEntry, 33),
    ComponentRecord::new("Checkbox", "NzCheckboxModule", "checkbox", DataEntry, 34),
    ComponentRecord::new("ColorPicker", "NzColorPickerModule", "color-picker", DataEntry, 35),
    ComponentRecord::new("DatePicker", "NzDatePickerModule", "date-picker", DataEntry, 36),
    ComponentRecord::new("Form", "NzFormModule", "form", DataEntry, 37).with_schematics(Schematics::Form),
    ComponentRecord::new("Input", "NzInputModule", "input", DataEntry, 38),
    ComponentRecord::new("InputNumber", "NzInputNumberModule", "input-number", DataEntry, 39),
    ComponentRecord::new("Mention", "NzMentionModule", "mention", DataEntry, 40),
    ComponentRecord::new("Radio", "NzRadioModule", "radio", DataEntry, 41),
    ComponentRecord::new("Rate", "NzRateModule", "rate", DataEntry, 42),
    ComponentRecord::new("Select", "NzSelectModule", "select", DataEntry, 43),
    ComponentRecord::new("Slider", "NzSliderModule", "slider", DataEntry, 44),
    ComponentRecord::new("Switch", "NzSwitchModule", "switch", DataEntry, 45),
    ComponentRecord::new("TimePicker", "NzTimePickerModule", "time-picker", DataEntry, 46),
    ComponentRecord::new("Transfer", "NzTransferModule", "transfer", DataEntry, 47),
    ComponentRecord::new("TreeSelect", "NzTreeSelectModule", "tree-select", DataEntry, 48),
    ComponentRecord::new("Upload", "NzUploadModule", "upload", DataEntry, 49),

    // ── Layout ─────────────────────────────────────
    ComponentRecord::new("Divider", "NzDividerModule", "divider", Layout, 50),
    ComponentRecord::new("Flex", "NzFlexModule", "flex", Layout, 51),
    ComponentRecord::new("Grid", "NzGridModule", "grid", Layout, 52),
    ComponentRecord::new("Layout", "NzLayoutModule", "layout", Layout, 53),
    ComponentRecord::new("Space", "NzSpaceModule", "space", Layout, 54),
    ComponentRecord::new("Splitter", "NzSplitterModule", "splitter", Layout, 55),

    // ── General ─────────────────────────────────────
    ComponentRecord::new("Button", "NzButtonModule", "button", General, 56),
    ComponentRecord::new("FloatButton", "NzFloatButtonModule", "float-button", General, 57),
    ComponentRecord::new("Icon", "NzIconModule", "icon", General, 58),
    ComponentRecord::new("Typography", "NzTypographyModule", "typography", General, 59),

    // ── Navigation ─────────────────────────────────────
    ComponentRecord::new("Anchor", "NzAnchorModule", "anchor", Navigation, 60),
    ComponentRecord::new("Breadcrumb", "NzBreadCrumbModule", "breadcrumb", Navigation, 61),
    ComponentRecord::new("Dropdown", "NzDropDownModule", "dropdown", Navigation, 62),
    ComponentRecord::new("Menu", "NzMenuModule", "menu", Navigation, 63),
    ComponentRecord::new("PageHeader", "NzPageHeaderModule", "page-header", Navigation, 64),
    ComponentRecord::new("Pagination", "NzPaginationModule", "pagination", Navigation, 65),
    ComponentRecord::new("Steps", "NzStepsModule", "steps", Navigation, 66),
    ComponentRecord::new("Tabs", "NzTabsModule", "tabs", Navigation, 67),

    // ── Other ─────────────────────────────────────
    ComponentRecord::new("Affix", "NzAffixModule", "affix", Other, 68),
    ComponentRecord::new("BackTop", "NzBackTopModule", "back-top", Other, 69),
    ComponentRecord::new("WaterMark", "NzWaterMarkModule", "water-mark", Other, 70),

    // ── Special ─────────────────────────────────────
    ComponentRecord::new("CheckList", "NzCheckListModule", "check-list", Special, 71),
    ComponentRecord::new("HashCode", "NzHashCodeModule", "hash-code", Special, 72),
];
