mod common;
mod readiness;
mod session;
