pub use crate::builder::{LrfuBuilder, LrfuConfig};
pub use crate::ds::{IndexedMinHeap, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LrfuMetricsSnapshot;
pub use crate::policy::lrfu::{LrfuPolicy, ScoreClock, ScoreRecord, ScoreTable, TouchList};
pub use crate::traits::{ReplacementPolicy, SlotIndex, SlotStore};
