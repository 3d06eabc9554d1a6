/// Database used when neither `MONGODB_DB_NAME` nor the URI path names one.
pub const FALLBACK_DATABASE_NAME: &str = "cognitive-twin";

pub const DEFAULT_APP_NAME: &str = "cognitive-twin";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const VENTURES_COLLECTION: &str = "ventures";
pub const VENTURE_MODELS_COLLECTION: &str = "ventureModels";
pub const SIM_RUNS_COLLECTION: &str = "simRuns";
