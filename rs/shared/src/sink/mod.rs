mod log;
mod mock;
mod r#trait;

pub use self::log::LogSink;
pub use self::mock::MockSink;
pub use self::r#trait::Sink;
