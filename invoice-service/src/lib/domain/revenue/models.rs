/// Revenue booked in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    /// Three-letter month abbreviation, e.g. `Jan`
    pub month: String,
    pub revenue: i64,
}
