mod resource;

pub use self::resource::ObjectIdentity;
pub use self::resource::ResourceKind;
