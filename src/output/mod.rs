pub mod html;
pub mod ics;
