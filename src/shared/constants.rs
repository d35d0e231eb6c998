/// Path prefix shared by every backend endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Super admin role - full access to the admin dashboard
pub const ROLE_SUPER: &str = "SUPER";

/// Admin role - can manage catalog data and triage quote requests
pub const ROLE_ADMIN: &str = "ADMIN";

/// Regular registered user
pub const ROLE_USER: &str = "USER";
