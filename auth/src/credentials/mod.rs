pub mod errors;
pub mod login;
pub mod policy;

pub use errors::LoginError;
pub use errors::PasswordPolicyError;
pub use login::Login;
pub use policy::validate_password;
