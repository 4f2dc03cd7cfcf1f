//! # Reporting
//!
//! Dashboard statistics derived from a snapshot of the `orders` collection. Everything
//! here is a pure function of the orders, a [`Directory`](crate::lookup::Directory) for
//! display names, a [`DashboardScope`] and the caller's "now", so the same inputs always
//! give the same dashboard.
//!
//! Only delivered orders count. The staff dashboard uses [`DashboardScope::All`]; a
//! student's dashboard is the same computation scoped to their id.
//!
//! ```rust
//! use cafeteria::lookup::Directory;
//! use cafeteria::reports::{Dashboard, DashboardScope};
//! use chrono::Utc;
//!
//! let dash = Dashboard::build(&[], &Directory::default(), &DashboardScope::All, &Utc::now());
//! assert_eq!(dash.average_order_value, 0.0);
//! ```

pub mod dashboard;
pub mod tally;

pub use dashboard::*;
pub use tally::Tally;
