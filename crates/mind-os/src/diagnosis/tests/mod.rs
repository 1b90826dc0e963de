mod common;
mod intake;
mod subtype;
