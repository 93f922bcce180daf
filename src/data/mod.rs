/// Data layer: roster types, filtering, study tips, and the trend window.
///
/// Architecture:
/// ```text
///   seed (fixed demo roster)
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  Vec<StudentRecord>, loaded once
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name query + category → matching indices
///   └──────────┘
///        │
///        ▼
///   view adapters (table rows, KPIs, chart data)
/// ```
/// The trend window sits beside this flow: it is fed by a timer, not by
/// the roster, and ignores the active filter.

pub mod filter;
pub mod model;
pub mod seed;
pub mod suggest;
pub mod trend;
