pub use self::shim::*;
mod shim;
