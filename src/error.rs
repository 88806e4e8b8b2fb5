use snafu::Snafu;

pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;

#[derive(Debug, Snafu, Clone, Eq, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum NormalizeError {
    #[snafu(display("Expression is nested deeper than the limit of {}", limit))]
    DepthLimitExceeded { limit: usize },
}
