// Composition root for the entries client.
//
// Responsibilities
// - Fix the backend origin at build time.
// - Wire the backend adapter into the use case handlers.
// - Own the page and map handler results onto it.

pub mod config;
pub mod controller;
pub mod input;
pub mod page;
pub mod state;
