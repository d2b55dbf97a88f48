use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ModelError {
    #[error("Unrecognised eigenvector ordering '{0}'. Expected 'haeberlen', 'nqr', 'increasing' or 'decreasing'.")]
    UnknownEigenOrder(String),

    #[error("A site labelled '{0}' already exists in the spin system")]
    DuplicateLabel(String),

    #[error("Site index {0} is out of range for the spin system")]
    SiteIndexOutOfRange(usize),

    #[error("Unknown isotope '{0}' and no gyromagnetic ratio was given")]
    UnknownIsotope(String),
}
