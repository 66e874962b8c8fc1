//! Text formats produced by cardex: vCard 3.0 and Google contacts CSV.

pub mod rfc;
