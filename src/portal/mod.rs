//! Portal domain: seed entities, the section router, the news store and the
//! read-only calendar and family tree.

pub mod calendar;
pub mod dates;
pub mod draft;
pub mod model;
pub mod news;
pub mod router;
pub mod tree;
