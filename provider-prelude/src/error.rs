#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The site could not be reached or the body could not be read.
    Network,
    /// The site answered with a non success status.
    HttpStatus,
}

#[derive(Clone, Debug)]
pub enum ProviderErrorReason {
    UnableToQuery { url: String, cause: String },
    UnableToRead { url: String, cause: String },
    InvalidStatus { url: String, status: u16 },
}

impl ProviderErrorReason {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::UnableToQuery { .. } | Self::UnableToRead { .. } => ProviderErrorKind::Network,
            Self::InvalidStatus { .. } => ProviderErrorKind::HttpStatus,
        }
    }
}

impl std::fmt::Display for ProviderErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToQuery { url, cause } => write!(f, "unable to query {url}: {cause}"),
            Self::UnableToRead { url, cause } => write!(f, "unable to read {url}: {cause}"),
            Self::InvalidStatus { url, status } => {
                write!(f, "failed to fetch {url}, status: {status}")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderError {
    pub origin: &'static str,
    pub reason: ProviderErrorReason,
}

impl ProviderError {
    pub fn new(origin: &'static str, reason: ProviderErrorReason) -> Self {
        Self { origin, reason }
    }

    pub fn kind(&self) -> ProviderErrorKind {
        self.reason.kind()
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.origin, self.reason)
    }
}

impl std::error::Error for ProviderError {}
