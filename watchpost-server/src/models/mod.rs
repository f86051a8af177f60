mod device;
mod function_config;
mod notification;
mod user;

pub use device::{Device, DeviceTable};
pub use function_config::{FunctionConfig, FunctionConfigTable};
pub use notification::{Notification, NotificationTable};
pub use user::{User, UserTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
