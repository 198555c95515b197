pub mod glabel;
pub mod smart;
pub mod storcli;
pub mod zfs;
