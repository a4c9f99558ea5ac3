mod common;
mod offers;
mod service;
