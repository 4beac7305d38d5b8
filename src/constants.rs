// Server
pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost:3000";
pub const API_PREFIX: &str = "/api/v1";

// Pagination
pub const DEFAULT_PAGE_NUM: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

// Requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Shown when the server does not supply an error message
pub const MSG_ERROR_OCCURRED: &str = "An error occurred";
