//! Views that report widget activity while it happens

pub mod reporter;
