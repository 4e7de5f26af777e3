use crate::component::prelude;

pub mod demo;
