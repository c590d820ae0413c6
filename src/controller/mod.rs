mod about;
pub mod contact;
mod home;
mod post;

pub(crate) use about::*;
pub(crate) use home::*;
pub(crate) use post::*;
