pub mod diagnostics;
pub mod extract;
pub mod tokens;
pub mod users;
