//! **pathedit** — an interactive grid editor driving the pathgrid search
//! engine.
//!
//! Controls:
//! - left click: place / remove a wall under the pointer
//! - right click: inspect the cell under the pointer
//! - `s` / `g`: place or remove the start / goal at the pointer
//! - space: run the search and mark the path
//! - `r` / `c`: scatter random walls / clear all walls
//! - `q` or Escape: quit

pub mod app;
pub mod colors;
pub mod controller;
pub mod editor;
pub mod frontend;
pub mod status;
pub mod term;
