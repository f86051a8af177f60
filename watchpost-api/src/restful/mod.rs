mod device;
mod function;
mod notify;
mod user;

pub use device::*;
pub use function::*;
pub use notify::*;
pub use user::*;
