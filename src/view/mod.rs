mod about;
mod contact;
mod home;
mod post;

pub(crate) use about::*;
pub(crate) use contact::*;
pub(crate) use home::*;
pub(crate) use post::*;
