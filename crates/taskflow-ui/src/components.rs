mod empty_state;
mod error_view;
mod loading_skeleton;
mod progress_section;
mod stats_display;
mod task_input;
mod task_item;
mod task_list;
mod toaster;

pub use empty_state::EmptyState;
pub use error_view::ErrorView;
pub use loading_skeleton::LoadingSkeleton;
pub use progress_section::ProgressSection;
pub use stats_display::StatsDisplay;
pub use task_input::TaskInput;
pub use task_item::TaskItem;
pub use task_list::{
  TaskList,
  TaskRowState
};
pub use toaster::Toaster;
