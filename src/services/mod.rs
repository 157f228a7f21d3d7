//! Service layer: densification, time formatting, grid layout and
//! render-plan assembly.
//!
//! Services are pure, synchronous functions of their inputs. They consume
//! the typed records from [`models`](crate::models) and the resolved
//! [`CalendarConfig`](crate::config::CalendarConfig), and never touch
//! files or ambient state.

pub mod densifier;
pub mod layout;
pub mod render_plan;
pub mod time_format;


pub use densifier::densify;
pub use layout::{
    compute_month_anchors, compute_positions, layout_season, GridPosition, MonthAnchor,
    SeasonLayout,
};
pub use render_plan::{build_render_plan, DayCell, MonthBlock, RenderPlan};
pub use time_format::format_start_time;
