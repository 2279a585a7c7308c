//! Miscellaneous types, for the moment limited to [errors](err).

pub mod err;
