mod device_handle;
mod function_handle;
mod notification_handle;
mod notify_handle;
mod user_handle;

pub use device_handle::*;
pub use function_handle::*;
pub use notification_handle::*;
pub use notify_handle::*;
pub use user_handle::*;
