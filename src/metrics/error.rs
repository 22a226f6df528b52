#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("cannot aggregate an empty set of readings")]
    EmptyInput,
}
