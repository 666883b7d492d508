/// Base URI of the second version of the game's web API
pub const API_BASE_URI: &str = "https://api.guildwars2.com/v2/";

/// Largest amount of ids the API accepts in one `?ids=` request
pub const MAX_IDS_PER_REQUEST: usize = 200;

/// Reserved accessor argument meaning "enumerate and fetch every id"
pub const ALL_SENTINEL: &str = "all";

/// Amount of worker threads used to build specializations concurrently
pub const MAX_CONCURRENT_BUILDS: usize = 10;

/// Requests timeout in seconds, used when `GW2API_REQUESTS_TIMEOUT` is not set
pub const DEFAULT_REQUESTS_TIMEOUT: u64 = 8;

/// Environment variable overriding [`DEFAULT_REQUESTS_TIMEOUT`]
pub const REQUESTS_TIMEOUT_VARIABLE: &str = "GW2API_REQUESTS_TIMEOUT";
