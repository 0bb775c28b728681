pub(crate) mod debug;

pub(crate) use debug::{debug_enabled, debug_from_env, set_debug};
