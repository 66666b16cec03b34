pub(crate) mod roll;
pub(crate) mod trace;
