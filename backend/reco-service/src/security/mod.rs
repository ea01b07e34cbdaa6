pub mod jwt;
pub mod password;
pub mod users;

pub use jwt::{Claims, JwtKeys};
pub use users::{User, UserDirectory};
