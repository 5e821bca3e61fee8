// Career recommendation, gap analysis and learning roadmap.
// Tables live in `catalog`; everything else is a pure function over them.

pub mod catalog;
pub mod gap;
pub mod handlers;
pub mod recommend;
pub mod roadmap;
