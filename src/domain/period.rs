/// A contiguous segment of match time (a half, an extra-time period).
///
/// Timestamps are absolute seconds on the dataset clock. `end_timestamp`
/// stays unset until a later event in the same period fixes it, and is final
/// once the next period begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    pub id: u8,
    pub start_timestamp: f64,
    pub end_timestamp: Option<f64>,
}
