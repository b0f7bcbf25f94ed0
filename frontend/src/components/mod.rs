pub mod history_list;
pub mod segment_editor;
pub mod wheel_tabs;

pub use history_list::HistoryList;
pub use segment_editor::SegmentEditor;
pub use wheel_tabs::WheelTabs;
