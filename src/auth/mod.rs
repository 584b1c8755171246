pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use utils::{
    can_view_quiz_result, generate_salt, hash_password, require_admin, require_owner_or_admin,
    require_professor, verify_password,
};
