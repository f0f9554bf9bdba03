//! Data models for roadmaps and their items.
//!
//! This module contains the canonical in-memory representation of a roadmap
//! document. Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! A value of these types is in *canonical form* once it has passed the
//! importer: every item carries all of its fields, with `links`, `status`,
//! `notes` and `due_date` defaulted when the document omitted them.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Item, ItemStatus, Link, Roadmap};
//!
//! let mut item = Item::new("rust-basics", "Rust basics", "Ownership and borrowing");
//! item.links.push(Link::new("The Book", "https://doc.rust-lang.org/book/"));
//!
//! let roadmap = Roadmap {
//!     title: "Rust".to_string(),
//!     description: None,
//!     items: vec![item],
//! };
//!
//! assert_eq!(roadmap.items[0].status, ItemStatus::NotStarted);
//! assert!(roadmap.contains_item("rust-basics"));
//! ```

pub mod item;
pub mod roadmap;
pub mod status;
pub mod summary;


pub use item::{Item, Link};
pub use roadmap::Roadmap;
pub use status::ItemStatus;
pub use summary::{Progress, StatusGroups};
