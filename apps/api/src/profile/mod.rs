// Profile card: headline (tagline, photo, videos), the "about" view data and contact buttons.

pub mod contact;
pub mod handlers;
pub mod headline;
