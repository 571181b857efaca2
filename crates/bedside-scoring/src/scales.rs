pub mod avpu;
pub mod braden;
pub mod cam_icu;
pub mod crt;
pub mod gcs;
pub mod morse;
pub mod news;
pub mod qsofa;
pub mod rass;
pub mod vip;
