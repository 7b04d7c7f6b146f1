#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchFeed { url: String },
    ListingReady {
        sections: usize,
        jobs: usize,
        dropped: usize,
    },
    ReportFailure { message: String },
}
