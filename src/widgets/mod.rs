//! Page widgets that work without the full comment box.

pub mod comment_count;
pub mod recent_comments;

pub use comment_count::{comment_count, CountTarget};
pub use recent_comments::{render_recent_list, MountPoint, RecentComments};
