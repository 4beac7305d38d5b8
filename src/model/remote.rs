use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOST, DEFAULT_SCHEME};

/// Base URL of the invoices API server. All resource operations take a
/// `Remote` so tests can point at a mock server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub url: String,
}

impl Remote {
    pub fn new(url: impl AsRef<str>) -> Remote {
        Remote {
            url: url.as_ref().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Remote {
    fn default() -> Remote {
        Remote::new(format!("{DEFAULT_SCHEME}://{DEFAULT_HOST}"))
    }
}
