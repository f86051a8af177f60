mod device;
mod function_config;
mod notification;
mod user;

pub use device::DeviceRepository;
pub use function_config::FunctionConfigRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
