pub mod commit;

pub use commit::update_order;
