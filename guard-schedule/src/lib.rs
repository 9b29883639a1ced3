//! Guard-to-site scheduling core.
//!
//! `domain` holds the pure pieces (range resolution, generation, index,
//! filters, mutation), `application` the board that owns the state and the
//! row DTOs handed to renderers, `infrastructure` roster loading.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::board::{ScheduleBoard, ViewMode};
pub use domain::date_range::DateRange;
pub use domain::models::{Assignment, AssignmentStatus, Guard, GuardId, Site, SiteId};
pub use domain::roster::Roster;
pub use error::ScheduleError;
