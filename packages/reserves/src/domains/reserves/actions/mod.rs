pub mod moves;
pub mod sorting;

pub use moves::{
    move_after, move_down, move_item, move_to_bottom, move_to_position, move_to_top, move_up,
    partition, same_arrangement,
};
pub use sorting::{
    apply_sort_order, default_order, display_order, is_manual_sort, sort_resources, stamp_order,
};
